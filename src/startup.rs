use std::net::TcpListener;

use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    email_client::EmailClient,
    routes::{health_check, reject_malformed_submission, send_email},
};

/// Inbox that receives every contact notification.
pub struct NotificationRecipient(pub String);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let email_client = configuration
            .email_client
            .client()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        tracing::info!(port, "Contact service listening");
        let server = run(
            listener,
            email_client,
            configuration.notification.recipient_email,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    recipient_email: String,
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let recipient = Data::new(NotificationRecipient(recipient_email));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(reject_malformed_submission))
            .service(health_check)
            .service(send_email)
            .app_data(email_client.clone())
            .app_data(recipient.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
