// PDF text extraction: multipart intake, per-file ceiling checks, and
// blank-line merging of the per-file text. Extraction is sequential and
// all-or-nothing — one bad file fails the whole request.

pub mod handlers;
pub mod pdf;
