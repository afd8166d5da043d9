//! Bundle assembly: merge the sorted tables, the static symbol lists and the
//! Rime templates into dated distribution directories.
//!
//! The core library hands over complete in-memory tables; everything about
//! on-disk layout lives here. Seven bundles are produced per run: the
//! numeral-augmented table, the three sort flavors, and the three flavors
//! again with the legacy symbol list appended, plus the private-use
//! substitution table used by the downstream dictionary app.

use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use cangjie6_core::{
    parse_raw_table, sort_table, to_tsv, transform, Config, FreqTables, OverrideMode, Scheme,
};

struct BundleTask {
    target_dir: PathBuf,
    template_dir: PathBuf,
    dict_file: &'static str,
    content: String,
}

pub fn run(config: &Config) -> Result<()> {
    let raw = fs::File::open(&config.raw_table)
        .with_context(|| format!("open raw table {}", config.raw_table.display()))?;
    let records = parse_raw_table(BufReader::new(raw))?;
    let tables = transform(&records);
    info!(
        records = records.len(),
        candidates = tables.code_only.len(),
        "transformed raw table"
    );

    let freqs = FreqTables::load(&config.simplified_freq, &config.traditional_freq)?;

    let general = sort_table(
        &tables.code_only,
        Scheme::GeneralMultiplicative,
        Some(OverrideMode::General),
        &freqs,
    );
    let traditional = sort_table(
        &tables.code_only,
        Scheme::TraditionalFirst,
        Some(OverrideMode::Traditional),
        &freqs,
    );
    let simplified = sort_table(
        &tables.code_only,
        Scheme::SimplifiedFirst,
        Some(OverrideMode::Simplified),
        &freqs,
    );

    let zsymbols = read_symbols(config, "zsymbols.txt")?;
    let zsymbols_plain = read_symbols(config, "zsymbols_without_num.txt")?;
    let legacy_symbols = read_symbols(config, "symbols_legacy.txt")?;

    let date = Local::now().format("%Y%m%d");
    let num_dir = config
        .output_root
        .join(format!("RimeData_{date}_Cangjie6_Sharp_Num"));
    let plain_root = config
        .output_root
        .join(format!("RimeData_{date}_Cangjie6_Sharp"));
    let legacy_root = config
        .output_root
        .join(format!("RimeData_{date}_Cangjie6_Sharp_With_Legacy_Symbols"));

    let num_templates = config.template_dir.join("cj6_sharp_num");
    let templates = config.template_dir.join("cj6_sharp");

    let flavors = [
        ("一般排序", &general),
        ("傳統漢字優先排序", &traditional),
        ("簡體中文優先排序", &simplified),
    ];

    let mut tasks = vec![BundleTask {
        target_dir: num_dir,
        template_dir: num_templates,
        dict_file: "cangjie6_sharp_num.dict.yaml",
        content: concat(&[&to_tsv(&tables.numeral), &zsymbols]),
    }];
    for (dir, table) in flavors {
        tasks.push(BundleTask {
            target_dir: plain_root.join(dir),
            template_dir: templates.clone(),
            dict_file: "cangjie6_sharp.dict.yaml",
            content: concat(&[&to_tsv(table), &zsymbols_plain]),
        });
    }
    for (dir, table) in flavors {
        tasks.push(BundleTask {
            target_dir: legacy_root.join(dir),
            template_dir: templates.clone(),
            dict_file: "cangjie6_sharp.dict.yaml",
            content: concat(&[&to_tsv(table), &zsymbols_plain, &legacy_symbols]),
        });
    }

    for task in &tasks {
        assemble(task)?;
    }

    let pua_path = config.output_root.join("2356_cangjie6.txt");
    fs::write(&pua_path, to_tsv(&tables.substituted))
        .with_context(|| format!("write {}", pua_path.display()))?;
    println!(
        "2356_cangjie6.txt contains private-use substitution characters for lookup \
         uniqueness only; use the Rime tables in the bundle directories as your code table."
    );

    Ok(())
}

fn read_symbols(config: &Config, name: &str) -> Result<String> {
    let path = config.symbols_dir.join(name);
    fs::read_to_string(&path).with_context(|| format!("read symbol table {}", path.display()))
}

/// Join table/symbol sections, keeping exactly one newline between them.
fn concat(sections: &[&str]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i + 1 < sections.len() {
            out.push_str(section.trim_end_matches('\n'));
            out.push('\n');
        } else {
            out.push_str(section);
        }
    }
    out
}

fn assemble(task: &BundleTask) -> Result<()> {
    fs::create_dir_all(&task.target_dir)
        .with_context(|| format!("create {}", task.target_dir.display()))?;

    for entry in fs::read_dir(&task.template_dir)
        .with_context(|| format!("read templates {}", task.template_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("yaml") {
            if let Some(name) = path.file_name() {
                fs::copy(&path, task.target_dir.join(name))
                    .with_context(|| format!("copy template {}", path.display()))?;
            }
        }
    }

    // The copied dict template carries the header; the generated table and
    // symbols are appended beneath it.
    let dict_path = task.target_dir.join(task.dict_file);
    let template = fs::read_to_string(&dict_path)
        .with_context(|| format!("read dict template {}", dict_path.display()))?;
    fs::write(&dict_path, format!("{template}{}", task.content))
        .with_context(|| format!("write {}", dict_path.display()))?;

    info!(dir = %task.target_dir.display(), "assembled bundle");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::concat;

    #[test]
    fn concat_keeps_single_newline_between_sections() {
        assert_eq!(concat(&["a\tb\n", "sym\n"]), "a\tb\nsym\n");
        assert_eq!(concat(&["a\tb\n\n", "s\n", "t\n"]), "a\tb\ns\nt\n");
    }
}
