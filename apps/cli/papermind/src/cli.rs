//! Command-line interface using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PaperMind - upload PDF documents and ask questions about them.
#[derive(Parser, Debug)]
#[command(name = "papermind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the backend base URL for this invocation only.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a PDF document.
    Upload {
        /// Path to the PDF file.
        path: PathBuf,
    },

    /// List all uploaded documents.
    List,

    /// Show one document by id.
    Show {
        /// Document id as reported by `list`.
        id: i64,
    },

    /// Delete a document by id.
    Delete {
        /// Document id as reported by `list`.
        id: i64,
    },

    /// Ask a question about a document.
    Ask {
        /// Document id to ask about.
        id: i64,

        /// The question text.
        question: String,
    },

    /// Check backend connectivity.
    Status {
        /// Keep watching; refreshes the document list on reconnect.
        #[arg(long)]
        watch: bool,
    },

    /// Show or update the stored configuration.
    Config {
        /// Persist a new backend base URL.
        #[arg(long, value_name = "URL")]
        set_url: Option<String>,
    },
}
