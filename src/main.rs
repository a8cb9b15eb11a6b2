use anyhow::Context;
use clap::Parser;
use ai_quiz::{Config, Quiz, logging};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config).context("failed to set up logging")?;

    let quiz = Quiz::new(&config).context("failed to load the quiz")?;
    quiz.run().context("error running quiz")?;
    Ok(())
}
