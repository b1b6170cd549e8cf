//! Simple SDK Example
//!
//! Creates a question, answers it, reads it back and cleans up.
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package qanda-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package qanda-sdk --example simple
//!    ```

use qanda_sdk::QandaClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Qanda SDK - Simple Example");
    println!("==========================\n");

    // 1. Connect to server
    println!("1. Connecting to server...");
    let client = QandaClient::connect("http://127.0.0.1:9527").await?;
    let health = client.health().await?;
    println!("   ✓ Connected (server v{})\n", health.version);

    // 2. Ask a question
    println!("2. Creating a question...");
    let question = client.create_question("What is 2+2?").await?;
    println!("   ✓ Question #{}: {}\n", question.id, question.text);

    // 3. Answer it twice
    println!("3. Answering...");
    for (user, text) in [("alice", "4"), ("bob", "Four")] {
        let answer = client.create_answer(question.id, user, text).await?;
        println!("   ✓ Answer #{} by {}", answer.id, answer.user_id);
    }
    println!();

    // 4. Read it back with answers
    println!("4. Fetching question with answers...");
    let question = client.get_question(question.id).await?;
    for answer in &question.answers {
        println!("   - {}: {}", answer.user_id, answer.text);
    }
    println!();

    // 5. Blank input is rejected by the server
    println!("5. Creating a blank question...");
    match client.create_question("   ").await {
        Err(e) if e.is_validation() => println!("   ✓ Rejected: {}\n", e),
        other => println!("   ✗ Unexpected: {:?}\n", other),
    }

    // 6. Delete the question (answers go with it)
    println!("6. Deleting question #{}...", question.id);
    client.delete_question(question.id).await?;
    let first_answer = question.answers[0].id;
    match client.get_answer(first_answer).await {
        Err(e) if e.is_not_found() => println!("   ✓ Answer #{} removed too", first_answer),
        other => println!("   ✗ Unexpected: {:?}", other),
    }

    Ok(())
}
