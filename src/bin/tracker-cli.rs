use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "tracker-cli")]
#[command(about = "Command-line client for the exercise tracker", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    NewUser { username: String },
    /// List all users
    Users,
    /// Record an exercise for a user
    Add {
        user_id: String,
        description: String,
        /// Minutes
        duration: String,
        /// Defaults to today on the server
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a user's exercise log
    Log {
        user_id: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::NewUser { username } => {
            client
                .post(format!("{}/api/exercise/new-user", cli.url))
                .form(&[("username", username)])
                .send()
                .await?
        }
        Commands::Users => {
            client
                .get(format!("{}/api/exercise/users", cli.url))
                .send()
                .await?
        }
        Commands::Add {
            user_id,
            description,
            duration,
            date,
        } => {
            let mut form = vec![
                ("userId", user_id),
                ("description", description),
                ("duration", duration),
            ];
            if let Some(date) = date {
                form.push(("date", date));
            }
            client
                .post(format!("{}/api/exercise/add", cli.url))
                .form(&form)
                .send()
                .await?
        }
        Commands::Log {
            user_id,
            from,
            to,
            limit,
        } => {
            let mut query = vec![("userId", user_id)];
            query.extend(from.map(|v| ("from", v)));
            query.extend(to.map(|v| ("to", v)));
            query.extend(limit.map(|v| ("limit", v.to_string())));
            client
                .get(format!("{}/api/exercise/log", cli.url))
                .query(&query)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: tracker returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
