use clap::{Parser, ValueEnum};
use pdf_compose::{
    CertificatePayload, DirectoryDelivery, Engine, FileDelivery, ProgressReportPayload,
    RenderOptions, ResourceGuidePayload, SealedDocument, Theme,
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Kind {
    Certificate,
    ProgressReport,
    ResourceGuide,
}

#[derive(Parser)]
#[command(name = "pdf-compose", about = "Render branded PDF documents from JSON payloads")]
struct Args {
    /// Which document to render
    #[arg(value_enum)]
    kind: Kind,
    /// JSON payload describing the document's content
    payload: PathBuf,
    /// Directory to save the PDF into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// JSON theme file overriding the default brand
    #[arg(long)]
    theme: Option<PathBuf>,
    /// Year printed in page footers (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,
    /// Leave page content streams uncompressed
    #[arg(long)]
    no_compress: bool,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("can't read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("invalid {}: {e}", path.display()))
}

fn render(engine: &Engine, kind: Kind, payload: &Path) -> Result<SealedDocument, String> {
    let sealed = match kind {
        Kind::Certificate => {
            engine.render_certificate(&read_json::<CertificatePayload>(payload)?)
        }
        Kind::ProgressReport => {
            engine.render_progress_report(&read_json::<ProgressReportPayload>(payload)?)
        }
        Kind::ResourceGuide => {
            engine.render_resource_guide(&read_json::<ResourceGuidePayload>(payload)?)
        }
    };
    sealed.map_err(|e| e.to_string())
}

fn run(args: Args) -> Result<(), String> {
    let mut options = RenderOptions::new();
    if let Some(theme) = &args.theme {
        options.theme(read_json::<Theme>(theme)?);
    }
    if let Some(year) = args.year {
        options.footer_year(year);
    }
    options.compress(!args.no_compress);

    let engine = Engine::new(options);
    let sealed = render(&engine, args.kind, &args.payload)?;

    let delivery = DirectoryDelivery::new(&args.out_dir);
    delivery.deliver(&sealed).map_err(|e| e.to_string())?;
    println!(
        "{} ({} page(s))",
        delivery.path_for(&sealed).display(),
        sealed.page_count()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.payload.is_file() {
        eprintln!("Error: payload not found: {}", args.payload.display());
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
