use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forum_client::{AuthResponse, ForumClient, ForumClientError, Topic, User};

const TOKEN_FILE: &str = ".forum_token";
const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "forum-cli", version, about = "CLI client for forum-server")]
struct Cli {
    /// Server address.
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a user.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log a user in.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the profile of the authenticated user (requires token).
    Me,
    /// List all topics.
    List,
    /// Find a topic by exact title.
    Find {
        #[arg(long)]
        title: String,
    },
    /// Create a topic authored by the given user.
    Create {
        #[arg(long)]
        author_id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        tags: Vec<String>,
    },
    /// Delete a topic by title.
    Delete {
        #[arg(long)]
        title: String,
    },
    /// Rename a topic.
    Rename {
        #[arg(long)]
        title: String,
        #[arg(long)]
        new_title: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()));
    let mut client = ForumClient::new(server);

    if let Some(token) = load_token().context("failed to read .forum_token")? {
        client.set_token(token);
    }

    match cli.command {
        Command::Register {
            name,
            surname,
            email,
            password,
        } => {
            let auth = client
                .register(&name, &surname, &email, &password)
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("failed to save token")?;
            print_auth("Registered", &auth);
        }
        Command::Login { email, password } => {
            let auth = client
                .login(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("failed to save token")?;
            print_auth("Logged in", &auth);
        }
        Command::Me => {
            let user = client.me().await.map_err(map_client_error)?;
            print_user(&user);
        }
        Command::List => {
            let topics = client.list_topics().await.map_err(map_client_error)?;
            print_list(&topics);
        }
        Command::Find { title } => {
            match client.find_topic(&title).await.map_err(map_client_error)? {
                Some(topic) => print_topic("Topic", &topic),
                None => println!("No topic titled {title:?}"),
            }
        }
        Command::Create {
            author_id,
            title,
            content,
            tags,
        } => {
            let topic = client
                .create_topic(author_id, &title, &content, &tags)
                .await
                .map_err(map_client_error)?;
            print_topic("Topic created", &topic);
        }
        Command::Delete { title } => {
            let confirmation = client.delete_topic(&title).await.map_err(map_client_error)?;
            println!("{confirmation}");
        }
        Command::Rename { title, new_title } => {
            match client
                .rename_topic(&title, &new_title)
                .await
                .map_err(map_client_error)?
            {
                Some(topic) => print_topic("Topic renamed", &topic),
                None => println!("No topic titled {title:?}"),
            }
        }
    }

    Ok(())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn persist_token(client: &ForumClient) -> io::Result<()> {
    if let Some(token) = client.get_token() {
        fs::write(TOKEN_FILE, token)?;
    }
    Ok(())
}

fn map_client_error(err: ForumClientError) -> anyhow::Error {
    let message = match err {
        ForumClientError::Unauthorized => {
            "authorization required: run `forum-cli login ...` or `forum-cli register ...`"
                .to_string()
        }
        ForumClientError::NotFound => "resource not found".to_string(),
        ForumClientError::InvalidRequest(message) => format!("invalid request: {message}"),
        ForumClientError::Http(err) => format!("http error: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_auth(title: &str, auth: &AuthResponse) {
    println!("{title}");
    println!("token: {}", auth.access_token);
    print_user(&auth.user);
}

fn print_user(user: &User) {
    println!("user:");
    println!("  id: {}", user.id);
    println!("  name: {} {}", user.name, user.surname);
    println!("  email: {}", user.email);
    println!("  posts: {:?}", user.posts);
    println!("  created_at: {}", user.created_at);
}

fn print_topic(title: &str, topic: &Topic) {
    println!("{title}");
    println!("id: {}", topic.id);
    println!("title: {}", topic.title);
    println!("content: {}", topic.content);
    println!("tags: {}", topic.tags.join(", "));
    println!("author_id: {}", topic.author_id);
    println!("created_at: {}", topic.created_at);
}

fn print_list(topics: &[Topic]) {
    println!("Topics: {}", topics.len());

    for topic in topics {
        println!(
            "- [{}] {} (author_id={})",
            topic.id, topic.title, topic.author_id
        );
    }
}
