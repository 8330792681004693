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

    let templates = client.get_templates().await?;
    println!("{templates}");

    Ok(())
}
