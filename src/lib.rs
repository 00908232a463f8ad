//! list-sorter - Markdown nested list sorter
//!
//! カーソル位置の箇条書きを階層を保ったままソートする

// コアモジュール
pub mod error;
pub mod logging;
pub mod options;

// データ層
pub mod buffer;

// ロジック層
pub mod list;

// ホスト連携
pub mod commands;

// 公開API
pub use buffer::{EditorHost, LineBuffer, LineEnding, Position};
pub use commands::{CommandRegistry, CompositeSubscription, SortCommand, Subscription};
pub use error::{Result, SorterError};
pub use list::{sort_list_at_cursor, Direction, SortOutcome};
pub use options::SorterOptions;
