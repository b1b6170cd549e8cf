//! Qanda CLI - Command-line interface for the Qanda server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9527";

#[derive(Parser)]
#[command(name = "qanda")]
#[command(about = "Qanda question/answer CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "QANDA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage questions
    #[command(subcommand)]
    Questions(QuestionCommands),

    /// Manage answers
    #[command(subcommand)]
    Answers(AnswerCommands),

    /// Check that the server is up
    Health,
}

#[derive(Subcommand)]
enum QuestionCommands {
    /// List all questions
    List,

    /// Ask a new question
    Create {
        /// Question text
        text: String,
    },

    /// Show a question with its answers
    Show { id: i64 },

    /// Delete a question and all of its answers
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum AnswerCommands {
    /// Answer a question
    Add {
        /// Question ID
        question_id: i64,

        /// Answering user
        #[arg(short, long)]
        user: String,

        /// Answer text
        text: String,
    },

    /// Show an answer
    Show { id: i64 },

    /// Delete an answer
    Delete { id: i64 },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct Question {
    id: i64,
    text: String,
    created_at: i64,
    #[serde(default)]
    answers: Vec<Answer>,
}

#[derive(Deserialize)]
struct Answer {
    id: i64,
    question_id: i64,
    user_id: String,
    text: String,
    created_at: i64,
}

#[derive(Tabled)]
struct QuestionRow {
    id: i64,
    text: String,
    created: String,
}

#[derive(Tabled)]
struct AnswerRow {
    id: i64,
    question: i64,
    user: String,
    text: String,
    created: String,
}

impl From<&Question> for QuestionRow {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            text: q.text.clone(),
            created: format_millis(q.created_at),
        }
    }
}

impl From<&Answer> for AnswerRow {
    fn from(a: &Answer) -> Self {
        Self {
            id: a.id,
            question: a.question_id,
            user: a.user_id.clone(),
            text: a.text.clone(),
            created: format_millis(a.created_at),
        }
    }
}

fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Error message shown for a JSON-RPC error code
fn describe_rpc_error(code: i32, message: &str) -> String {
    match code {
        4000 => format!("Invalid input: {}", message),
        4001 => message.to_string(),
        5001 => format!("Server error: {}", message),
        _ => format!("RPC error ({}): {}", code, message),
    }
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to server")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!(describe_rpc_error(error.code, &error.message));
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Questions(QuestionCommands::List) => {
            let result = call_rpc(&cli.rpc_url, "questions.list.v1", json!([])).await?;
            let questions: Vec<Question> = serde_json::from_value(result)?;

            if questions.is_empty() {
                println!("{}", "No questions yet".yellow());
            } else {
                let rows: Vec<QuestionRow> = questions.iter().map(QuestionRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Questions(QuestionCommands::Create { text }) => {
            let result =
                call_rpc(&cli.rpc_url, "questions.create.v1", json!({ "text": text })).await?;
            let question: Question = serde_json::from_value(result)?;

            println!("{}", "✓ Question created".green().bold());
            println!();
            println!("{}", Table::new(vec![QuestionRow::from(&question)]));
        }

        Commands::Questions(QuestionCommands::Show { id }) => {
            let result = call_rpc(&cli.rpc_url, "questions.get.v1", json!({ "id": id })).await?;
            let question: Question = serde_json::from_value(result)?;

            println!("{}", format!("Question #{}", question.id).cyan().bold());
            println!("  {}", question.text);
            println!("  {} {}", "Asked:".bold(), format_millis(question.created_at));
            println!();

            if question.answers.is_empty() {
                println!("{}", "No answers yet".yellow());
            } else {
                let rows: Vec<AnswerRow> = question.answers.iter().map(AnswerRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Questions(QuestionCommands::Delete { id }) => {
            call_rpc(&cli.rpc_url, "questions.delete.v1", json!({ "id": id })).await?;

            println!(
                "{}",
                format!("✓ Question {} and its answers deleted", id)
                    .green()
                    .bold()
            );
        }

        Commands::Answers(AnswerCommands::Add {
            question_id,
            user,
            text,
        }) => {
            let params = json!({
                "question_id": question_id,
                "user_id": user,
                "text": text,
            });
            let result = call_rpc(&cli.rpc_url, "answers.create.v1", params).await?;
            let answer: Answer = serde_json::from_value(result)?;

            println!("{}", "✓ Answer created".green().bold());
            println!();
            println!("{}", Table::new(vec![AnswerRow::from(&answer)]));
        }

        Commands::Answers(AnswerCommands::Show { id }) => {
            let result = call_rpc(&cli.rpc_url, "answers.get.v1", json!({ "id": id })).await?;
            let answer: Answer = serde_json::from_value(result)?;

            println!("{}", Table::new(vec![AnswerRow::from(&answer)]));
        }

        Commands::Answers(AnswerCommands::Delete { id }) => {
            call_rpc(&cli.rpc_url, "answers.delete.v1", json!({ "id": id })).await?;

            println!("{}", format!("✓ Answer {} deleted", id).green().bold());
        }

        Commands::Health => {
            println!("{}", "System Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "system.health.v1", json!([])).await {
                Ok(health) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Version:".bold(), health["version"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
