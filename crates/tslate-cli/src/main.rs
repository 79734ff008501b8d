//! Inspection tool for Linguist `.ts` translation files
//!
//! Parses each file given on the command line, prints a per-file health
//! report (contexts, messages, plural entries, untranslated strings,
//! duplicate overrides), and exits non-zero when any file fails to parse.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tslate::{parse, TsDocument};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tslate=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        bail!("usage: tslate <file.ts>...");
    }

    let mut failures = 0usize;
    for file in &files {
        match inspect(Path::new(file)) {
            Ok(report) => print!("{report}"),
            Err(e) => {
                error!(file = %file, error = %e, "failed to inspect file");
                eprintln!("{file}: {e:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} file(s) failed", files.len());
    }
    Ok(())
}

fn inspect(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let doc = parse(&content).with_context(|| format!("cannot parse {}", path.display()))?;
    debug!(path = %path.display(), contexts = doc.contexts.len(), "parsed translation source");
    Ok(report(path, &doc))
}

fn report(path: &Path, doc: &TsDocument) -> String {
    let messages = doc.message_count();
    let mut plural = 0usize;
    let mut untranslated = 0usize;
    let mut overrides = 0usize;
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for context in &doc.contexts {
        for message in &context.messages {
            if matches!(message.translation, tslate::Translation::Plural(_)) {
                plural += 1;
            }
            if message.is_untranslated() {
                untranslated += 1;
            }
            if !seen.insert((context.name.as_str(), message.source.as_str())) {
                overrides += 1;
            }
        }
    }

    let mut out = format!(
        "{}: locale {} (format {})\n",
        path.display(),
        doc.locale,
        doc.version.as_deref().unwrap_or("unversioned"),
    );
    out.push_str(&format!(
        "  contexts: {}  messages: {}  plural: {}\n",
        doc.contexts.len(),
        messages,
        plural,
    ));
    out.push_str(&format!(
        "  untranslated: {}  duplicate overrides: {}\n",
        untranslated, overrides,
    ));

    let forms = doc.locale.plural_rule().forms();
    for context in &doc.contexts {
        for message in &context.messages {
            if let tslate::Translation::Plural(variants) = &message.translation {
                if !variants.is_empty() && variants.len() != forms {
                    out.push_str(&format!(
                        "  warning: '{}' in {} has {} numerusform(s), locale expects {}\n",
                        message.source,
                        context.name,
                        variants.len(),
                        forms,
                    ));
                }
            }
        }
    }
    out
}
