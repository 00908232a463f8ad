//! コマンドシステム
//!
//! ホストへ公開するソートコマンドと、登録解除ハンドル付きのコマンド登録

use crate::buffer::EditorHost;
use crate::error::{CommandError, Result};
use crate::list::{sort_list_at_cursor, Direction, SortOutcome};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// コマンド名の名前空間
pub const NAMESPACE: &str = "list-sorter";

/// ソートコマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCommand {
    Ascending,
    Descending,
}

impl SortCommand {
    pub const ALL: [SortCommand; 2] = [SortCommand::Ascending, SortCommand::Descending];

    /// 文字列からコマンドを作成（名前空間付きの名前も受け付ける）
    pub fn from_string(cmd: &str) -> Option<Self> {
        match cmd {
            "sort-ascending" | "list-sorter:ascending" => Some(SortCommand::Ascending),
            "sort-descending" | "list-sorter:descending" => Some(SortCommand::Descending),
            _ => None,
        }
    }

    /// コマンドID
    pub fn id(self) -> &'static str {
        match self {
            SortCommand::Ascending => "sort-ascending",
            SortCommand::Descending => "sort-descending",
        }
    }

    /// 名前空間付きのコマンドID
    pub fn namespaced_id(self) -> String {
        format!("{}:{}", NAMESPACE, self.direction().name())
    }

    /// コマンドの説明を取得
    pub fn description(self) -> &'static str {
        match self {
            SortCommand::Ascending => "カーソル位置のリストを昇順にソート",
            SortCommand::Descending => "カーソル位置のリストを降順にソート",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            SortCommand::Ascending => Direction::Ascending,
            SortCommand::Descending => Direction::Descending,
        }
    }

    /// コマンドを実行
    pub fn execute<H>(self, host: &mut H) -> Result<Option<SortOutcome>>
    where
        H: EditorHost + ?Sized,
    {
        sort_list_at_cursor(host, self.direction())
    }
}

type Handler = Rc<dyn Fn(&mut dyn EditorHost) -> Result<Option<SortOutcome>>>;
type HandlerTable = RefCell<HashMap<String, Handler>>;

/// コマンド登録テーブル
#[derive(Default)]
pub struct CommandRegistry {
    handlers: Rc<HandlerTable>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 両方向のソートコマンドを登録したテーブルと、その登録解除ハンドル
    pub fn with_sort_commands() -> (Self, CompositeSubscription) {
        let registry = Self::new();
        let mut subscriptions = CompositeSubscription::new();

        for command in SortCommand::ALL {
            for id in [command.id().to_string(), command.namespaced_id()] {
                let handler = move |host: &mut dyn EditorHost| command.execute(host);
                // 新規テーブルなので重複はない
                if let Ok(subscription) = registry.register(id, handler) {
                    subscriptions.add(subscription);
                }
            }
        }

        (registry, subscriptions)
    }

    /// コマンドを登録
    pub fn register<F>(&self, id: impl Into<String>, handler: F) -> Result<Subscription>
    where
        F: Fn(&mut dyn EditorHost) -> Result<Option<SortOutcome>> + 'static,
    {
        let id = id.into();
        let mut handlers = self.handlers.borrow_mut();
        if handlers.contains_key(&id) {
            return Err(CommandError::AlreadyRegistered { command: id }.into());
        }
        handlers.insert(id.clone(), Rc::new(handler));
        log::debug!("registered command {}", id);

        Ok(Subscription {
            id,
            table: Rc::downgrade(&self.handlers),
            disposed: false,
        })
    }

    /// 登録済みか確認
    pub fn contains(&self, id: &str) -> bool {
        self.handlers.borrow().contains_key(id)
    }

    /// 登録済みのコマンドID（ソート済み）
    pub fn command_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.handlers.borrow().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// コマンドを実行
    pub fn dispatch(&self, id: &str, host: &mut dyn EditorHost) -> Result<Option<SortOutcome>> {
        let handler = self
            .handlers
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| CommandError::NotFound { command: id.to_string() })?;
        (*handler)(host)
    }
}

/// コマンド登録の解除ハンドル
///
/// `dispose` または drop 時に一度だけ登録を解除する。
pub struct Subscription {
    id: String,
    table: Weak<HandlerTable>,
    disposed: bool,
}

impl Subscription {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// 登録を解除（二回目以降は何もしない）
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.disposed = true;

        match self.table.upgrade() {
            Some(table) => {
                log::debug!("disposed command {}", self.id);
                table.borrow_mut().remove(&self.id).is_some()
            }
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// 複数の登録解除ハンドルをまとめて扱う
#[derive(Default)]
pub struct CompositeSubscription {
    subscriptions: Vec<Subscription>,
}

impl CompositeSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// すべて解除し、実際に解除した数を返す
    pub fn dispose(&mut self) -> usize {
        self.subscriptions
            .iter_mut()
            .map(Subscription::dispose)
            .filter(|&removed| removed)
            .count()
    }
}
