//! CLI entry point for folio

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_content::commands::{self, list::ListFilter, new::Draft};
use folio_content::content::{Collection, ProjectType};
use folio_content::Folio;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Builds the blog and project data modules of a portfolio site from Markdown", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DraftArgs {
    /// Title of the new entry
    title: String,

    /// Short summary shown in listings
    #[arg(short, long, default_value = "")]
    excerpt: String,

    #[arg(short = 'C', long)]
    category: Option<String>,

    /// Comma-separated tags (tech for projects)
    #[arg(short, long, default_value = "")]
    tags: String,

    /// Featured image path
    #[arg(short, long)]
    image: Option<String>,

    /// Fallback gradient when there is no image
    #[arg(short, long)]
    gradient: Option<String>,

    /// Read time, e.g. "5 min read" (estimated when omitted)
    #[arg(short, long)]
    read_time: Option<String>,
}

impl DraftArgs {
    fn into_draft(self, content: Option<String>) -> Draft {
        Draft {
            title: self.title,
            excerpt: self.excerpt,
            category: self.category,
            labels: commands::new::split_list(&self.tags),
            featured_image: self.image,
            gradient_id: self.gradient,
            read_time: self.read_time,
            content,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the blog data module
    BuildBlog,

    /// Generate the projects data module
    BuildProjects,

    /// Generate both data modules
    #[command(alias = "b")]
    Build,

    /// Rebuild data modules when content changes
    #[command(alias = "w")]
    Watch,

    /// Build, watch and run the site's dev server
    Dev,

    /// Scaffold a new blog post (or project) Markdown file
    New {
        #[command(flatten)]
        draft: DraftArgs,

        /// Create a project instead of a blog post
        #[arg(short, long)]
        project: bool,
    },

    /// Insert a new post into the hand-maintained blog data module
    Add {
        #[command(flatten)]
        draft: DraftArgs,

        /// Markdown body of the post
        #[arg(long, default_value = "")]
        content: String,
    },

    /// List site content
    List {
        /// Type of content to list (post, project, category, tag, tech, year)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only entries in this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Only entries matching this search term
        #[arg(short, long)]
        search: Option<String>,

        /// Only projects of this type (detailed, github-only)
        #[arg(long = "kind")]
        kind: Option<ProjectType>,

        /// Print the full record with this slug
        #[arg(long)]
        slug: Option<String>,
    },

    /// Copy dist/index.html to dist/404.html
    #[command(name = "copy-404")]
    Copy404,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_content=debug,info"
    } else {
        "folio_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let load = || -> Result<Folio> {
        let folio = Folio::new(&base_dir)?;
        tracing::debug!("Base directory: {:?}", folio.base_dir);
        Ok(folio)
    };

    match cli.command {
        Commands::BuildBlog => commands::build::run(&load()?, Collection::Blog)?,

        Commands::BuildProjects => commands::build::run(&load()?, Collection::Projects)?,

        Commands::Build => commands::build::run_all(&load()?)?,

        Commands::Watch => commands::watch::run(&load()?).await?,

        Commands::Dev => commands::dev::run(&load()?).await?,

        Commands::New { draft, project } => {
            tracing::info!("Creating new {}: {}", if project { "project" } else { "post" }, draft.title);
            commands::new::run(&load()?, &draft.into_draft(None), project)?;
        }

        Commands::Add { draft, content } => {
            let content = Some(content).filter(|c| !c.trim().is_empty());
            commands::add::run(&load()?, &draft.into_draft(content))?;
        }

        Commands::List {
            r#type,
            category,
            search,
            kind,
            slug,
        } => {
            let folio = load()?;
            if let Some(slug) = slug {
                let project = matches!(r#type.as_str(), "project" | "projects");
                println!("{}", commands::list::show(&folio, &slug, project)?);
            } else {
                let filter = ListFilter {
                    category,
                    search,
                    kind,
                };
                commands::list::run(&folio, &r#type, &filter)?;
            }
        }

        Commands::Copy404 => {
            let path = commands::copy404::run(&load()?)?;
            println!("✅ Created {}", path.display());
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
