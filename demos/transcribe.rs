use std::path::PathBuf;
use std::time::Instant;

use coptic_ipa::{
    engines::coptic::{CopticEngine, CopticTranscriptionParams, Origin},
    ssml::SsmlTemplateBuilder,
    TranscriptionEngine,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let build_start = Instant::now();
    let engine = CopticEngine::new()?;
    println!("Engine built in {:.2?}", build_start.elapsed());

    let text = "Ⲭⲉⲣⲉ ⲛⲉ Ⲙⲁⲣⲓⲁ, ϯⲣⲟⲙⲡⲓ ⲉⲑⲛⲉⲥⲱⲥ. Ⲓⲏ̅ⲥ̅ Ⲡⲭ̅ⲥ̅ ⲡ̀ϣⲏⲣⲓ ⲙ̀Ⲫϯ.";

    let start = Instant::now();
    let result = engine.transcribe(text, None)?;
    println!("Transcribed {} words in {:.2?}", result.word_count(), start.elapsed());
    println!("Normalized: {}", result.normalized);
    for (word, phonemes) in result.normalized.split(' ').zip(&result.phonemes) {
        println!("  {word} -> {phonemes}");
    }

    let greek = engine.transcribe(
        "ⲭⲏⲣⲁ",
        Some(CopticTranscriptionParams {
            origin: Some(Origin::Greek),
        }),
    )?;
    println!("As Greek: {:?}", greek.phonemes);

    let template = SsmlTemplateBuilder::default().header("<speak>").build()?;
    println!("{}", result.to_ssml(&template));

    engine.transcribe_to_file(text, &PathBuf::from("output.ssml"), None)?;
    println!("Saved to output.ssml");

    Ok(())
}
