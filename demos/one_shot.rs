//! One-shot chat completion with a fixed persona and question.

use std::time::Duration;

use spongebob::prelude::*;

#[tokio::main]
async fn main() -> spongebob::error::Result<()> {
    let config = ChatConfig::load(None)?.with_timeout(Duration::from_secs(60));
    let provider = ChatCompletionsProvider::new(config)?;

    let request = ChatRequest {
        messages: vec![
            Message::system(
                "You are SpongeBob SquarePants. Speak cheerfully and use ocean humor.",
            ),
            Message::user("Hi SpongeBob! What's your favorite jellyfishing memory?"),
        ],
        temperature: 0.6,
    };

    match provider.complete(&request).await {
        Ok(reply) => println!("SpongeBob: {reply}"),
        Err(err @ ChatError::Api { .. }) => println!("{err}"),
        Err(err) => return Err(err),
    }
    Ok(())
}
