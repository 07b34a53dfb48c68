use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use konsul_core::form::signature::{SignatureArtifact, SIGNATURE_MEDIA_TYPE};
use konsul_core::render;
use konsul_db::ConsultationRepository;

use crate::KonsulService;

impl KonsulService {
    /// Writes a printable bundle for one record: the rendered document
    /// (rich XHTML, or the text fallback when rendering degrades), the
    /// signature image, and a sha256 manifest of everything emitted.
    pub async fn export_consultation(&self, id: Uuid, output_dir: PathBuf) -> Result<PathBuf> {
        // 1. Fetch data
        let repo = ConsultationRepository::new(self.pool.clone());
        let record = repo
            .get(id)
            .await
            .context("Failed to fetch consultation from DB")?;

        // 2. Prepare output directory
        fs::create_dir_all(&output_dir)?;

        let mut emitted: Vec<PathBuf> = Vec::new();

        // 3. Render the print document; the fallback path keeps the export
        //    alive when the rich render fails.
        let (document, diagnostic) = render::render_with_fallback(&record);
        if let Some(err) = diagnostic {
            tracing::warn!(error = %err, "rich render failed; exporting text fallback");
        }
        let doc_path = output_dir.join(document.format.file_name());
        fs::write(&doc_path, &document.content)?;
        emitted.push(doc_path);

        // 4. Decode and write the signature image, when one decodes.
        if let Some(url) = &record.signature_data {
            if let Some(bytes) = SignatureArtifact::decode_data_url(url) {
                let ext = if url.contains(SIGNATURE_MEDIA_TYPE) { "svg" } else { "bin" };
                let sig_path = output_dir.join(format!("tanda_tangan.{}", ext));
                fs::write(&sig_path, bytes)?;
                emitted.push(sig_path);
            }
        }

        // 5. Build the manifest (sha256.txt)
        let mut manifest_entries = Vec::new();
        for path in &emitted {
            let rel = path
                .strip_prefix(&output_dir)?
                .to_string_lossy()
                .replace('\\', "/");
            let hash = calculate_file_hash(path)?;
            manifest_entries.push((hash, rel));
        }

        let manifest_path = output_dir.join("sha256.txt");
        let mut manifest_file = BufWriter::new(File::create(manifest_path)?);
        for (hash, filename) in manifest_entries {
            writeln!(manifest_file, "{}  {}", hash, filename)?;
        }

        Ok(output_dir)
    }
}

// Synchronous hashing helper
fn calculate_file_hash(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
