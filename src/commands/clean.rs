//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Remove the public directory
pub fn run(folio: &Folio) -> Result<()> {
    if folio.public_dir.exists() {
        fs::remove_dir_all(&folio.public_dir)?;
        tracing::info!("Deleted: {:?}", folio.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(public.join("blog")).unwrap();
        fs::write(public.join("index.html"), "x").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        run(&folio).unwrap();
        assert!(!public.exists());

        // Cleaning twice is fine
        run(&folio).unwrap();
    }
}
