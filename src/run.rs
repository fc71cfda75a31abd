use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::io::AsyncReadExt;

use crate::clean::clean;
use crate::settings::{OutputFormat, Settings};
use crate::vocab::{Vocabulary, fit_and_encode_with};

#[derive(Debug, Serialize)]
struct VocabEntry<'a> {
    token: &'a str,
    id: u32,
    count: u64,
    docs: u64,
}

#[derive(Debug, Serialize)]
struct Encoded<'a> {
    sequences: Vec<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vocabulary: Option<Vec<VocabEntry<'a>>>,
}

/// Reads one sentence per line from `inputs` in order, or from stdin if there
/// are none.
pub async fn read_sentences(inputs: &[PathBuf]) -> Result<Vec<String>> {
    if inputs.is_empty() {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(text.lines().map(str::to_string).collect());
    }

    let mut sentences = vec![];
    for path in inputs {
        if !path.exists() {
            anyhow::bail!("Input '{}' does not exist", path.display());
        }
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Couldn't read '{}'", path.display()))?;
        sentences.extend(text.lines().map(str::to_string));
    }
    tracing::debug!(count = sentences.len(), "Read sentences");
    Ok(sentences)
}

pub async fn clean_lines(settings: Settings) -> Result<()> {
    let sentences = read_sentences(&settings.inputs).await?;
    write_cleaned(std::io::stdout().lock(), &sentences)
}

pub async fn encode(settings: Settings, pre_clean: bool, show_vocab: bool) -> Result<()> {
    let mut sentences = read_sentences(&settings.inputs).await?;
    if pre_clean {
        sentences = sentences.iter().map(|s| clean(s)).collect();
    }
    let (sequences, vocab) = fit_and_encode_with(&sentences, settings.tokenizer);
    write_encoded(
        std::io::stdout().lock(),
        sequences,
        show_vocab.then_some(&vocab),
        settings.format,
    )
}

pub async fn decode(settings: Settings, pre_clean: bool, ids: &[u32]) -> Result<()> {
    let mut sentences = read_sentences(&settings.inputs).await?;
    if pre_clean {
        sentences = sentences.iter().map(|s| clean(s)).collect();
    }
    let mut vocab = Vocabulary::new(settings.tokenizer);
    vocab.fit(&sentences);
    println!("{}", vocab.decode(ids));
    Ok(())
}

fn write_cleaned(mut writer: impl Write, sentences: &[String]) -> Result<()> {
    for sentence in sentences {
        writeln!(writer, "{}", clean(sentence))?;
    }
    Ok(())
}

fn write_encoded(
    mut writer: impl Write,
    sequences: Vec<Vec<u32>>,
    vocab: Option<&Vocabulary>,
    format: OutputFormat,
) -> Result<()> {
    let vocabulary = vocab.map(|vocab| {
        vocab
            .index_word()
            .map(|(id, token)| {
                let (count, docs) = vocab
                    .stats(token)
                    .map_or((0, 0), |stats| (stats.count, stats.docs));
                VocabEntry {
                    token,
                    id,
                    count,
                    docs,
                }
            })
            .collect()
    });
    let encoded = Encoded {
        sequences,
        vocabulary,
    };
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &encoded)?;
            writeln!(writer)?;
        }
        OutputFormat::Yaml => serde_yml::to_writer(&mut writer, &encoded)?,
    }
    Ok(())
}
