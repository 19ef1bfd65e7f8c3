use blog_client::{BlogClientHttp, BlogClientTrait};
use clap::Parser;
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    List,
    Get {
        id: Uuid,
    },
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        author: String,
    },
    Update {
        id: Uuid,
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        author: String,
    },
    Delete {
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let client = BlogClientHttp::connect(&args.server)?;

    match args.command {
        Command::List => {
            let posts = client.list_posts().await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- [{}] {} (by {})", post.id, post.title, post.author);
            }
        }
        Command::Get { id } => {
            let post = client.get_post(id).await?;
            println!("{}", post);
        }
        Command::Create {
            title,
            content,
            author,
        } => {
            let post = client.create_post(title, content, author).await?;
            println!("Post created! ID: {}", post.id);
        }
        Command::Update {
            id,
            title,
            content,
            author,
        } => {
            client.update_post(id, title, content, author).await?;
            println!("Post updated!")
        }
        Command::Delete { id } => {
            client.delete_post(id).await?;
            println!("Post deleted!")
        }
    }

    Ok(())
}
