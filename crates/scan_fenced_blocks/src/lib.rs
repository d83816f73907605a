// crates/scan_fenced_blocks/src/lib.rs

use extract_header_filename::extract_header_filename;
use fence_marker::{FENCE, FENCE_CPP};

/// One fenced code block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Filename captured from the header line, or `None` when the first line
    /// inside the block is not a recognized filename comment.
    pub filename: Option<String>,
    /// Body lines in document order, header line first, fences excluded.
    pub lines: Vec<String>,
    /// True when the opening fence carried no language tag.
    pub bare_fence: bool,
    /// 1-based line number of the opening fence.
    pub line: usize,
}

/// Scans `content` for fenced code blocks opened by a line exactly equal to
/// the cpp-tagged fence or the bare fence.
///
/// The line after the opening fence is the block's header line; it is matched
/// against the filename-comment pattern and kept as the first body line either
/// way. The body then runs until the next bare fence line, or until the input
/// ends (an unterminated block keeps the lines read so far). Scanning resumes
/// after each closing fence, so a block with an unrecognized header does not
/// swallow later well-formed blocks.
pub fn scan_fenced_blocks(content: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        if line != FENCE_CPP && line != FENCE {
            continue;
        }
        let bare_fence = line == FENCE;
        let opened_at = idx + 1;

        let Some((_, header)) = lines.next() else {
            // Fence at end of input: surface an empty headerless block so the
            // caller reports it instead of silently stopping.
            blocks.push(FencedBlock {
                filename: None,
                lines: Vec::new(),
                bare_fence,
                line: opened_at,
            });
            break;
        };

        let filename = extract_header_filename(header);
        let mut body = Vec::new();
        let mut current = header;
        loop {
            if current == FENCE {
                break;
            }
            body.push(current.to_string());
            match lines.next() {
                Some((_, next)) => current = next,
                // Unterminated block: keep the partial body.
                None => break,
            }
        }

        blocks.push(FencedBlock {
            filename,
            lines: body,
            bare_fence,
            line: opened_at,
        });
    }

    blocks
}
