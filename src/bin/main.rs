use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use coptic_ipa::engines::coptic::{batch, CopticEngine};
use coptic_ipa::ssml::SsmlTemplate;
use coptic_ipa::store::PronunciationStore;

const USAGE: &str = "\
Usage:
  coptic-ipa [--alphabet <file.json>]
      Read lines from stdin and print their normalized form and SSML.
  coptic-ipa [--alphabet <file.json>] batch <input.txt> <store.json>
      Transcribe every line of <input.txt> into the pronunciation store.";

fn main() {
    env_logger::init();

    if let Err(e) = run(std::env::args().skip(1).collect()) {
        eprintln!("[ERROR] {e}");
        std::process::exit(1);
    }
}

fn run(mut args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let engine = match args.iter().position(|a| a == "--alphabet") {
        Some(i) => {
            let path = args.get(i + 1).ok_or("--alphabet needs a file path")?.clone();
            args.drain(i..i + 2);
            CopticEngine::from_alphabet_file(Path::new(&path))?
        }
        None => CopticEngine::new()?,
    };
    let template = SsmlTemplate::default();

    match args.as_slice() {
        [] => interactive(&engine, &template),
        [cmd, input, store] if cmd == "batch" => {
            run_batch(&engine, &template, Path::new(input), Path::new(store))
        }
        _ => {
            eprintln!("{USAGE}");
            Err("invalid arguments".into())
        }
    }
}

fn interactive(
    engine: &CopticEngine,
    template: &SsmlTemplate,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Coptic IPA transcriber. Type a line of Coptic text, or 'exit' to quit.");
    let mut clipboard = ClipboardSink::new();
    let mut lines = stdin().lock().lines();
    loop {
        print!("> ");
        stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim() == "exit" {
            break;
        }
        let normalized = engine.normalize_line(&line);
        let ssml = template.render(
            engine
                .model()
                .transliterator()
                .transliterate_line(&normalized),
        );
        println!("{normalized}");
        println!("{ssml}");
        clipboard.copy(&ssml);
    }
    Ok(())
}

/// Receives each rendered SSML line. With the `clipboard` feature the line
/// replaces the system clipboard contents; otherwise it is dropped.
struct ClipboardSink {
    #[cfg(feature = "clipboard")]
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardSink {
    #[cfg(feature = "clipboard")]
    fn new() -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("Clipboard unavailable, SSML will only be printed: {e}");
                None
            }
        };
        Self { clipboard }
    }

    #[cfg(not(feature = "clipboard"))]
    fn new() -> Self {
        Self {}
    }

    #[cfg(feature = "clipboard")]
    fn copy(&mut self, text: &str) {
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => log::debug!("Copied {} bytes of SSML to clipboard", text.len()),
                Err(e) => log::warn!("Could not copy SSML to clipboard: {e}"),
            }
        }
    }

    #[cfg(not(feature = "clipboard"))]
    fn copy(&mut self, _text: &str) {}
}

fn run_batch(
    engine: &CopticEngine,
    template: &SsmlTemplate,
    input: &Path,
    store_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(input)?;
    let mut store = PronunciationStore::open(store_path)?;

    let start = Instant::now();
    let report = batch::populate_store(engine, template, content.lines(), &mut store);
    store.save()?;

    println!(
        "Done in {:.2?}: {} inserted, {} already present, {} duplicates, {} empty",
        start.elapsed(),
        report.inserted,
        report.already_present,
        report.duplicates,
        report.empty
    );
    println!("{} pronunciations in {}", store.len(), store.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, ClipboardSink};

    #[test]
    fn clipboard_sink_never_fails_the_loop() {
        // Headless machines have no clipboard; copying must still be a no-op.
        let mut sink = ClipboardSink::new();
        sink.copy("<speak></speak>");
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(run(vec!["frobnicate".to_string()]).is_err());
        assert!(run(vec!["--alphabet".to_string()]).is_err());
    }
}
