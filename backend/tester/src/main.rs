use clap::{Parser, Subcommand};
use navigator::{HttpTransport, LoaderData, Navigator, Submission};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type the text into the search field one keystroke at a time
    Search { text: String },

    /// Press "New", fill in the edit form and save it
    Create {
        #[arg(long)]
        first: Option<String>,

        #[arg(long)]
        last: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let transport = HttpTransport::new(&args.base_url)?;
    let mut navigator = Navigator::open(transport, "/").await?;

    info!("Opened {} with {} contacts", args.base_url, navigator.contacts().len());

    match args.command {
        Command::Search { text } => {
            let mut typed = String::new();

            for c in text.chars() {
                typed.push(c);
                navigator.search(&typed).await?;

                println!(
                    "{:<20} history: {}  matches: {}",
                    format!("{typed:?}"),
                    navigator.history().entries().len(),
                    navigator.contacts().len()
                );
            }

            for contact in navigator.contacts() {
                println!("  {}", contact.display_name().unwrap_or_else(|| "No Name".to_string()));
            }
        }
        Command::Create { first, last } => {
            navigator.submit(Submission::new("/")).await?;
            println!("New: {}", navigator.location());

            let mut form = Submission::new(navigator.location().pathname.clone());
            if let Some(first) = first {
                form = form.field("first", first);
            }
            if let Some(last) = last {
                form = form.field("last", last);
            }

            navigator.submit(form).await?;
            println!("Saved: {}", navigator.location());

            if let Some(LoaderData::Contact(contact)) = navigator.detail() {
                println!(
                    "  {} ({})",
                    contact.display_name().unwrap_or_else(|| "No Name".to_string()),
                    contact.id
                );
            }
        }
    }

    Ok(())
}
