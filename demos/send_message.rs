use std::io;

use ccpsms::SmsClient;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SmsClient::new(
        required("CCPSMS_HOST")?,
        required("CCPSMS_ACCOUNT_SID")?,
        required("CCPSMS_AUTH_TOKEN")?,
        required("CCPSMS_APP_ID")?,
    )?;
    let to = required("CCPSMS_PHONE")?;
    let template_id = std::env::var("CCPSMS_TEMPLATE_ID").unwrap_or_else(|_| "1".to_owned());
    let data = std::env::var("CCPSMS_TEMPLATE_DATA")
        .map(|raw| raw.split(',').map(str::to_owned).collect::<Vec<_>>())
        .unwrap_or_default();

    client.send_message(template_id, to, data).await?;
    println!("message accepted");

    Ok(())
}
