use asyncquence_rust::config;
use asyncquence_rust::demo;
use asyncquence_rust::errors::CoreError;
use asyncquence_rust::logging;

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    let config = config::config()?;
    logging::init(&config.logging)?;

    let run = demo::run(&config.demo).await;

    println!("Secuencia ejecutada: {}", run.transcript.join(" -> "));
    println!("Resultado: {:?} ({} steps iniciados)", run.outcome, run.outcome.executed());
    for event in &run.events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}
