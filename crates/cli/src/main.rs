use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use toolbelt::files::{copy_dir, count_lines, ScanCfg};
use toolbelt::geom2::{Polygon, Side};
use toolbelt::journal::FileJournal;
use toolbelt::words::top_k_words;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon collision checks plus a few small file and text utilities")]
struct Cmd {
    /// Audit journal; one `[YYYY-MM-DD HH:MM:SS] LEVEL: message` line per event
    #[arg(long, global = true, default_value = "app.log")]
    journal: PathBuf,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run every utility on the built-in sample inputs
    Demo {
        #[arg(long, default_value = "./source_dir")]
        source: PathBuf,
        #[arg(long, default_value = "./target_dir")]
        target: PathBuf,
    },
    /// Check whether two polygons ("x,y x,y x,y ...") overlap or touch
    Collide {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[arg(long)]
        json: bool,
    },
    /// Most frequent words of a text or file
    Words {
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(short, long, default_value_t = 10)]
        k: usize,
        #[arg(long)]
        json: bool,
    },
    /// Recursively copy a directory
    Copy {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        to: PathBuf,
    },
    /// Count lines of files with the given extensions, recursively
    Lines {
        #[arg(long)]
        dir: PathBuf,
        /// Extension with leading dot; repeatable. Defaults to .txt and .log
        #[arg(long = "ext")]
        exts: Vec<String>,
        /// Descend into symlinked directories and count symlinked files
        #[arg(long)]
        follow_links: bool,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo { source, target } => {
            let mut journal = open_journal(&cmd.journal)?;
            demo::run(&source, &target, &mut journal, &mut std::io::stdout().lock())
        }
        Action::Collide { a, b, json } => collide(&a, &b, json),
        Action::Words {
            text,
            file,
            k,
            json,
        } => words(text, file, k, json),
        Action::Copy { from, to } => {
            let mut journal = open_journal(&cmd.journal)?;
            let report = copy_dir(&from, &to, &mut journal)?;
            tracing::info!(files = report.files, dirs = report.dirs, "copy");
            Ok(())
        }
        Action::Lines {
            dir,
            exts,
            follow_links,
            json,
        } => {
            let cfg = scan_cfg(exts, follow_links)?;
            let mut journal = open_journal(&cmd.journal)?;
            lines(&dir, &cfg, json, &mut journal)
        }
    }
}

fn open_journal(path: &Path) -> Result<FileJournal> {
    let journal = FileJournal::open(path)
        .with_context(|| format!("opening journal {}", path.display()))?;
    tracing::debug!(journal = %journal.path().display(), "journal open");
    Ok(journal)
}

fn collide(a: &str, b: &str, json: bool) -> Result<()> {
    let pa = Polygon::try_from(report::parse_vertices(a).context("polygon --a")?)
        .map_err(|e| e.with_side(Side::A))?;
    let pb = Polygon::try_from(report::parse_vertices(b).context("polygon --b")?)
        .map_err(|e| e.with_side(Side::B))?;
    let contact = pa.contact(&pb);
    tracing::info!(n_a = pa.len(), n_b = pb.len(), ?contact, "collide");
    if json {
        let doc = report::CollideJson::new(contact);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", contact.is_some());
    }
    Ok(())
}

fn words(text: Option<String>, file: Option<PathBuf>, k: usize, json: bool) -> Result<()> {
    let text = match (text, file) {
        (Some(t), _) => t,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => demo::SAMPLE_TEXT.to_string(),
    };
    let top = top_k_words(&text, k);
    tracing::info!(k, found = top.len(), "words");
    if json {
        println!("{}", serde_json::to_string_pretty(&report::words_json(&top))?);
    } else {
        for (word, count) in &top {
            println!("{word}\t{count}");
        }
    }
    Ok(())
}

fn scan_cfg(exts: Vec<String>, follow_links: bool) -> Result<ScanCfg> {
    let mut cfg = ScanCfg {
        follow_links,
        ..ScanCfg::default()
    };
    if !exts.is_empty() {
        if let Some(bad) = exts.iter().find(|e| !e.starts_with('.')) {
            bail!("extension {bad:?} must start with a dot");
        }
        cfg.extensions = exts;
    }
    Ok(cfg)
}

fn lines(dir: &Path, cfg: &ScanCfg, json: bool, journal: &mut FileJournal) -> Result<()> {
    let counts = count_lines(dir, cfg, journal)?;
    tracing::info!(
        dir = %dir.display(),
        files = counts.len(),
        follow_links = cfg.follow_links,
        "lines"
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&report::lines_json(&counts))?);
    } else {
        for lc in &counts {
            println!("{}\t{}", lc.name, lc.lines);
        }
    }
    Ok(())
}
