use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phext")]
#[command(about = "Read and write nine-dimensional plain hypertext", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Document to operate on (defaults to the configured default label)
    #[arg(short, long, global = true)]
    pub label: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the phext store directory
    Init,

    /// Print the scroll at a coordinate
    #[command(alias = "s")]
    Select {
        /// Coordinate like 1.1.1/1.1.1/1.1.1 (defaults to the current one)
        coordinate: Option<String>,
    },

    /// Append text to a scroll, creating the document if needed
    #[command(alias = "i")]
    Insert {
        /// Coordinate to write at (defaults to the current one)
        #[arg(short, long)]
        at: Option<String>,

        /// Text to append (read from stdin when omitted)
        text: Vec<String>,
    },

    /// Replace the text of a scroll
    #[command(alias = "u")]
    Update {
        /// Coordinate to write at (defaults to the current one)
        #[arg(short, long)]
        at: Option<String>,

        /// New text (read from stdin when omitted)
        text: Vec<String>,
    },

    /// Edit a scroll in $EDITOR
    #[command(alias = "e")]
    Edit {
        /// Coordinate to edit (defaults to the current one)
        coordinate: Option<String>,
    },

    /// Clear a scroll
    #[command(alias = "rm")]
    Delete {
        /// Coordinate to clear (defaults to the current one)
        coordinate: Option<String>,
    },

    /// List every non-empty scroll
    #[command(alias = "ls")]
    List,

    /// Set the current coordinate
    #[command(alias = "g")]
    Goto {
        /// Coordinate like 1.1.1/1.1.1/1.1.1
        coordinate: String,
    },

    /// Set one axis of the current coordinate
    Jump {
        /// Axis name: library, shelf, series, collection, volume, book, chapter, section, scroll
        axis: String,

        /// New value for the axis
        value: u32,
    },

    /// Move to the next sibling along an axis
    Next {
        /// Axis name (defaults to scroll)
        #[arg(default_value = "scroll")]
        axis: String,
    },

    /// Move to the previous sibling along an axis
    Prev {
        /// Axis name (defaults to scroll)
        #[arg(default_value = "scroll")]
        axis: String,
    },

    /// Print the raw document, delimiters included
    Raw,

    /// Rewrite the document without empty structure
    Normalize,

    /// Load a raw phext file into the document
    Import {
        /// File to read
        path: String,
    },

    /// Write the raw document to a file
    Export {
        /// File to write
        path: String,
    },

    /// Replace one scroll with the contents of a file
    Push {
        /// Coordinate to write at (defaults to the current one)
        #[arg(short, long)]
        at: Option<String>,

        /// File to read
        path: String,
    },

    /// Write one scroll to a file
    Pull {
        /// Coordinate to read (defaults to the current one)
        #[arg(short, long)]
        at: Option<String>,

        /// File to write
        path: String,
    },

    /// Load every text file of a directory into consecutive scrolls
    Slurp {
        /// First coordinate to fill (defaults to the current one)
        #[arg(short, long)]
        at: Option<String>,

        /// Directory to read
        dir: String,
    },

    /// Print (or write) the scrolls as JSON keyed by coordinate
    JsonExport {
        /// File to write instead of printing
        path: Option<String>,
    },

    /// Table of contents: one line per scroll
    Toc,

    /// List stored documents
    Phexts,

    /// Delete a stored document
    Remove,

    /// Print where the document is stored
    Path,

    /// Get or set configuration values
    Config {
        /// Configuration key (default-label, preview-width)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
