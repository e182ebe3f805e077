use mvping_contact::configuration::get_configuration;
use mvping_contact::startup::Application;
use mvping_contact::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    // Setting up Logging
    let subscriber = get_subscriber("mvping-contact".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Refuse to start with missing or placeholder mail credentials
    let configuration = get_configuration().expect("Failed to read configuration");
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
