use crate::{
    cli::{Cli, Commands, GenerateArgs, RenderArgs, UnlockArgs},
    config::{load_answers_file, read_answers_arg, ConfigRecord, DocType},
    constants::{messages, DATE_FORMAT, STDIN_INDICATOR},
    error::Result,
    ioutils::{create_dir_all, get_output_dir, read_from, write_file},
    markdown::{self, page::render_page, Block},
    prompt::ask_questions,
    session::{
        store::{load_form, save_form, set_premium},
        Artifact, Entitlement, Exporter, FileStore, Preview, Selection,
    },
    templates::generate_many,
    validation::validate_identity,
};
use log::{debug, info};
use std::path::Path;

/// Dispatches the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => Runner::new(args).run(),
        Commands::Render(args) => render(&args),
        Commands::Unlock(args) => unlock(&args),
    }
}

fn open_store(path: Option<&Path>) -> Result<FileStore> {
    match path {
        Some(path) => FileStore::open(path),
        None => FileStore::new(),
    }
}

/// Today's date in the "Last Updated" format.
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// Orchestrates the generate workflow
pub struct Runner {
    args: GenerateArgs,
}

impl Runner {
    pub fn new(args: GenerateArgs) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        let mut store = open_store(self.args.store.as_deref())?;
        let entitlement = Entitlement::from_store(&store);
        debug!("Entitlement: {entitlement:?}");

        let docs = self.requested_docs(entitlement)?;
        let record = self.collect_record(load_form(&store).unwrap_or_default())?;
        validate_identity(&record)?;

        if self.args.no_save || self.args.dry_run {
            debug!("Not saving answers");
        } else {
            save_form(&mut store, &record)?;
        }

        let date = self.args.date.clone().unwrap_or_else(today);
        let record = record.with_last_updated(date);
        if !self.args.non_interactive {
            show_tabs(Preview::build(&record, entitlement));
        }
        let artifacts = self.build_artifacts(&docs, &record)?;

        if self.args.stdout {
            for artifact in &artifacts {
                println!("{}", artifact.payload);
            }
            return Ok(());
        }
        self.write_artifacts(&artifacts)
    }

    /// Explicitly requested documents must be unlocked; otherwise every
    /// unlocked document is generated.
    fn requested_docs(&self, entitlement: Entitlement) -> Result<Vec<DocType>> {
        if self.args.doc.is_empty() {
            return Ok(entitlement.documents());
        }
        let mut docs = Vec::new();
        for doc in &self.args.doc {
            entitlement.require(*doc)?;
            if !docs.contains(doc) {
                docs.push(*doc);
            }
        }
        Ok(docs)
    }

    /// Saved form, then the answers file, then inline answers, then the
    /// questionnaire. Later sources win.
    fn collect_record(&self, saved: ConfigRecord) -> Result<ConfigRecord> {
        let mut record = saved;
        if let Some(path) = &self.args.answers_file {
            record = record.merge_answers(&load_answers_file(path)?)?;
        }
        if let Some(answers) = &self.args.answers {
            record = record.merge_answers(&read_answers_arg(answers)?)?;
        }
        if self.args.non_interactive {
            debug!("Skipping questionnaire");
            Ok(record)
        } else {
            ask_questions(record)
        }
    }

    fn build_artifacts(&self, docs: &[DocType], record: &ConfigRecord) -> Result<Vec<Artifact>> {
        let exporter = Exporter::new()?;
        let mut formats = self.args.format.clone();
        formats.dedup();
        let mut artifacts = Vec::new();
        for (doc, content) in generate_many(docs.iter().copied(), record) {
            for format in &formats {
                artifacts.push(exporter.export(doc, &content, *format)?);
            }
        }
        Ok(artifacts)
    }

    fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<()> {
        if self.args.dry_run {
            for artifact in artifacts {
                let path = self.args.output_dir.join(&artifact.file_name);
                info!("[DRY RUN] Would write {} ({})", path.display(), artifact.mime);
            }
            println!("[DRY RUN] {} file(s) not written.", artifacts.len());
            return Ok(());
        }

        let output_root = get_output_dir(&self.args.output_dir, self.args.force)?;
        create_dir_all(&output_root)?;
        for artifact in artifacts {
            let path = output_root.join(&artifact.file_name);
            write_file(&artifact.payload, &path)?;
            info!("Wrote {}", path.display());
        }
        println!("Generated {} file(s) in {}.", artifacts.len(), output_root.display());
        Ok(())
    }
}

/// One entry per preview tab: the section count of each unlocked document,
/// or a locked marker.
fn tab_listing(preview: &mut Preview) -> Vec<String> {
    let mut listing = Vec::new();
    for tab in preview.tabs() {
        listing.push(match preview.select(tab.doc) {
            Selection::Shown(html) => format!("{} ({} sections)", tab.label, html.matches("<h2>").count()),
            Selection::UpgradeRequired => format!("{} (locked)", tab.label),
        });
    }
    listing
}

/// Prints the preview tabs on stderr, followed by the upgrade notice when
/// any tab is locked.
fn show_tabs(mut preview: Preview) {
    let listing = tab_listing(&mut preview);
    if let Some(markdown) = preview.active_markdown() {
        debug!("Active preview tab {} holds {} bytes", preview.active(), markdown.len());
    }
    eprintln!("\nPreview: {}", listing.join(" | "));
    if preview.tabs().iter().any(|tab| tab.locked) {
        eprintln!("{}", messages::UPGRADE);
    }
}

/// Title of the first `#` heading, if any.
fn first_title(source: &str) -> Option<String> {
    markdown::parse(source).into_iter().find_map(|block| match block {
        Block::Heading { level: 1, text } => Some(text),
        _ => None,
    })
}

pub fn render(args: &RenderArgs) -> Result<()> {
    let source = if args.input == STDIN_INDICATOR {
        read_from(std::io::stdin())?
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let html = if args.page {
        let title = args
            .title
            .clone()
            .or_else(|| first_title(&source))
            .unwrap_or_else(|| "Document".to_string());
        render_page(&title, &source)?
    } else {
        markdown::render(&source)
    };

    match &args.output {
        Some(path) => {
            write_file(&html, path)?;
            info!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

pub fn unlock(args: &UnlockArgs) -> Result<()> {
    let mut store = open_store(args.store.as_deref())?;
    set_premium(&mut store)?;
    info!("Premium flag saved to {}", store.path().display());
    println!("Premium unlocked. All document types are now available.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ExportFormat;
    use std::path::PathBuf;

    fn args(store: &Path, output_dir: PathBuf) -> GenerateArgs {
        GenerateArgs {
            answers: Some(r#"{"businessName":"Acme","websiteUrl":"https://acme.test","email":"a@acme.test"}"#.into()),
            answers_file: None,
            output_dir,
            doc: Vec::new(),
            format: vec![ExportFormat::Markdown],
            date: Some("January 1, 2026".into()),
            force: false,
            non_interactive: true,
            dry_run: false,
            stdout: false,
            no_save: false,
            store: Some(store.to_path_buf()),
        }
    }

    #[test]
    fn first_title_picks_top_level_heading() {
        assert_eq!(first_title("## Sub\n\n# Main\n"), Some("Main".to_string()));
        assert_eq!(first_title("plain"), None);
    }

    #[test]
    fn tab_listing_counts_sections_and_marks_locked() {
        let record = ConfigRecord { business_name: "Acme".into(), ..Default::default() };
        let mut free = Preview::build(&record, Entitlement::FREE);
        let listing = tab_listing(&mut free);
        assert_eq!(listing.len(), 5);
        assert!(listing[0].starts_with("Privacy Policy (") && listing[0].ends_with(" sections)"));
        assert!(listing[1..].iter().all(|entry| entry.ends_with("(locked)")));
        assert_eq!(free.active(), DocType::Privacy);

        let mut premium = Preview::build(&record, Entitlement::PREMIUM);
        assert!(tab_listing(&mut premium).iter().all(|entry| !entry.ends_with("(locked)")));
    }

    #[test]
    fn free_run_writes_only_privacy() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store.json");
        let out = dir.path().join("out");
        Runner::new(args(&store, out.clone())).run().unwrap();

        let privacy = std::fs::read_to_string(out.join("privacy-policy.md")).unwrap();
        assert!(privacy.contains("**Last Updated:** January 1, 2026"));
        assert!(!out.join("terms-of-service.md").exists());
    }

    #[test]
    fn locked_document_request_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store.json");
        let mut generate = args(&store, dir.path().join("out"));
        generate.doc = vec![DocType::Cookies];
        let err = Runner::new(generate).run().unwrap_err();
        assert!(err.to_string().contains("'Cookie Policy' requires premium access"));
    }

    #[test]
    fn saved_form_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store.json");
        Runner::new(args(&store, dir.path().join("first"))).run().unwrap();

        let mut again = args(&store, dir.path().join("second"));
        again.answers = None;
        Runner::new(again).run().unwrap();
        let privacy = std::fs::read_to_string(dir.path().join("second").join("privacy-policy.md")).unwrap();
        assert!(privacy.contains("Acme"));
    }

    #[test]
    fn unlock_then_generate_everything_in_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store.json");
        unlock(&UnlockArgs { store: Some(store.clone()) }).unwrap();

        let out = dir.path().join("out");
        let mut generate = args(&store, out.clone());
        generate.format = vec![ExportFormat::Markdown, ExportFormat::Html];
        Runner::new(generate).run().unwrap();

        let count = std::fs::read_dir(&out).unwrap().count();
        assert_eq!(count, 10);
        assert!(out.join("refund-policy.html").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store.json");
        let out = dir.path().join("out");
        let mut generate = args(&store, out.clone());
        generate.dry_run = true;
        Runner::new(generate).run().unwrap();
        assert!(!out.exists());
        assert!(!store.exists());
    }
}
