//! Configuration constants.
//!
//! This module defines the fixed names and defaults used throughout the application:
//! input field defaults, query name transforms, report labels and worksheet limits.

/// CSV column read when `--host-ip` is not given.
pub const DEFAULT_HOST_FIELD: &str = "Domain";

/// Required extension (case-insensitive) of the report file.
pub const REPORT_EXTENSION: &str = "xlsx";

/// Prefix prepended to a host to form its DMARC query name.
pub const DMARC_PREFIX: &str = "_dmarc.";

/// Filter applied to TXT records to isolate SPF policies.
pub const SPF_PATTERN: &str = r"(?i)^v=spf";

/// Header of the first column of every worksheet.
pub const HOST_HEADER: &str = "Host/IP";

/// Port used for nameservers given with `--ns`.
pub const DNS_PORT: u16 = 53;

/// Byte-order mark some editors (notably Excel) put at the start of UTF-8 files.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Rows per worksheet, header included.
pub const MAX_SHEET_ROWS: usize = 1_048_576;

/// Columns per worksheet.
pub const MAX_SHEET_COLUMNS: usize = 16_384;

/// Characters per cell; longer values are truncated.
pub const MAX_CELL_CHARS: usize = 32_767;
