//! Interactive prompts

use anyhow::{Context, Result};
use scanwatch_core::ScanId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Ask the user for a scan ID on stdin
pub async fn prompt_scan_id() -> Result<Option<ScanId>> {
    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    read_scan_id(&mut input, &mut output).await
}

/// Writes the question and reads one line
///
/// Returns `None` on an empty answer or end of input.
async fn read_scan_id<R, W>(input: &mut R, output: &mut W) -> Result<Option<ScanId>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(b"Scan ID to cancel: ")
        .await
        .context("Failed to write prompt")?;
    output.flush().await.context("Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .await
        .context("Failed to read scan ID")?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(ScanId::new(answer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_trimmed_answer() {
        let mut input: &[u8] = b"  scan-12  \n";
        let mut output = Vec::new();

        let id = read_scan_id(&mut input, &mut output).await.unwrap();

        assert_eq!(id, Some(ScanId::new("scan-12")));
        assert_eq!(output, b"Scan ID to cancel: ");
    }

    #[tokio::test]
    async fn test_empty_answer_is_none() {
        let mut input: &[u8] = b"\n";
        let mut output = Vec::new();
        assert_eq!(read_scan_id(&mut input, &mut output).await.unwrap(), None);

        let mut input: &[u8] = b"";
        assert_eq!(read_scan_id(&mut input, &mut output).await.unwrap(), None);
    }
}
