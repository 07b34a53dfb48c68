use rust_embed::RustEmbed;
use sqlx::{Executor, PgPool};

#[derive(RustEmbed)]
#[folder = "schema/"]
struct SchemaAssets;

/// Reads the build order and applies all SQL files in a single transaction.
pub async fn rebuild_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    // 1. Read the manifest
    let manifest = get_file_content("00_build_order.sql").expect("Missing 00_build_order.sql");

    // 2. Parse and aggregate SQL
    let mut full_script = String::new();

    for line in manifest.lines() {
        let trimmed = line.trim();

        // Parse: -- @include folder/file.sql
        if let Some(path) = parse_include_directive(trimmed) {
            tracing::debug!(path, "including schema file");
            let content =
                get_file_content(path).unwrap_or_else(|| panic!("Missing included file: {}", path));
            full_script.push_str(&content);
            full_script.push('\n');
        } else if !trimmed.starts_with("--") {
            // Keep normal lines (if any), ignore comments
            full_script.push_str(line);
            full_script.push('\n');
        }
    }

    // 3. Execute
    tx.execute(full_script.as_str()).await?;
    tx.commit().await?;

    tracing::info!("schema applied");
    Ok(())
}

fn get_file_content(path: &str) -> Option<String> {
    SchemaAssets::get(path).map(|f| String::from_utf8_lossy(f.data.as_ref()).into_owned())
}

fn parse_include_directive(line: &str) -> Option<&str> {
    line.strip_prefix("-- @include").map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_order_only_references_embedded_files() {
        let manifest = get_file_content("00_build_order.sql").expect("manifest must be embedded");
        let mut includes = 0;
        for line in manifest.lines() {
            if let Some(path) = parse_include_directive(line.trim()) {
                includes += 1;
                assert!(
                    get_file_content(path).is_some(),
                    "manifest references missing file {}",
                    path
                );
            }
        }
        assert!(includes > 0, "manifest includes nothing");
    }
}
