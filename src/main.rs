use anyhow::{bail, Context};
use clap::Parser;
use list_sorter::buffer::{EditorHost, LineBuffer, LineEnding, Position};
use list_sorter::commands::{CommandRegistry, SortCommand};
use list_sorter::logging::{self, LogLevel};
use list_sorter::options::{expand_path, SorterOptions};
use std::path::PathBuf;

/// カーソル位置の箇条書きを階層を保ったままソートする
#[derive(Debug, Parser)]
#[command(name = "list-sorter", version, about)]
struct Cli {
    /// 対象ファイル（`~` と環境変数を展開）
    #[arg(required_unless_present = "list_commands")]
    file: Option<String>,

    /// カーソル行（1始まり）
    #[arg(short, long, required_unless_present = "list_commands")]
    line: Option<usize>,

    /// カーソル列（1始まり）
    #[arg(short, long, default_value_t = 1)]
    column: usize,

    /// 降順でソート
    #[arg(short, long, conflicts_with = "command")]
    descending: bool,

    /// 実行するコマンドID（例: sort-ascending, list-sorter:descending）
    #[arg(long)]
    command: Option<String>,

    /// 結果をファイルへ書き戻す
    #[arg(short, long)]
    in_place: bool,

    /// 結果をJSONで出力
    #[arg(long)]
    json: bool,

    /// 改行コードを上書き（lf / crlf）
    #[arg(long)]
    line_ending: Option<String>,

    /// ログレベル（trace / debug / info / warn / error）
    #[arg(long)]
    log_level: Option<String>,

    /// ログファイル
    #[arg(long)]
    log_file: Option<String>,

    /// 既定のログファイル（~/.list-sorter/debug.log）へ出力
    #[arg(long)]
    log_to_file: bool,

    /// 登録済みコマンドの一覧を表示
    #[arg(long)]
    list_commands: bool,
}

impl Cli {
    fn options(&self) -> anyhow::Result<SorterOptions> {
        let log_level = match &self.log_level {
            Some(value) => Some(
                LogLevel::parse(value).with_context(|| format!("invalid log level: {}", value))?,
            ),
            None => None,
        };
        let line_ending = match &self.line_ending {
            Some(value) => Some(
                LineEnding::parse(value)
                    .with_context(|| format!("invalid line ending: {}", value))?,
            ),
            None => None,
        };
        let log_path = self.log_file.as_deref().map(expand_path).transpose()?;

        Ok(SorterOptions::default().merged_with(&SorterOptions {
            log_level,
            log_path,
            file_logging: self.log_to_file,
            line_ending,
        }))
    }

    fn command_id(&self) -> String {
        match &self.command {
            Some(id) => id.clone(),
            None if self.descending => SortCommand::Descending.id().to_string(),
            None => SortCommand::Ascending.id().to_string(),
        }
    }

    fn cursor(&self) -> anyhow::Result<Position> {
        let line = self.line.context("--line is required")?;
        if line == 0 || self.column == 0 {
            bail!("line and column are 1-based");
        }
        Ok(Position::at(line - 1, self.column - 1))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = cli.options()?;
    logging::init(&options).context("failed to initialize logging")?;

    let (registry, mut subscriptions) = CommandRegistry::with_sort_commands();
    if cli.list_commands {
        for id in registry.command_ids() {
            if let Some(command) = SortCommand::from_string(&id) {
                println!("{}\t{}", id, command.description());
            }
        }
        return Ok(());
    }

    let file = cli.file.as_deref().context("a file is required")?;
    let path: PathBuf = expand_path(file)?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut buffer = LineBuffer::from_text(&text);
    if let Some(line_ending) = options.line_ending {
        buffer = buffer.with_line_ending(line_ending);
    }
    let cursor = cli.cursor()?;
    buffer
        .set_cursor(cursor)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let outcome = registry
        .dispatch(&cli.command_id(), &mut buffer)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    subscriptions.dispose();

    if cli.in_place && buffer.is_modified() {
        std::fs::write(&path, buffer.text())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else if !cli.in_place {
        print!("{}", buffer.text());
    } else if let Some(outcome) = &outcome {
        println!(
            "sorted lines {}-{} {}, cursor at {}:{}",
            outcome.run.first + 1,
            outcome.run.last + 1,
            outcome.direction,
            outcome.cursor_after.line + 1,
            outcome.cursor_after.column + 1
        );
    } else {
        println!("no list at line {}", cursor.line + 1);
    }

    Ok(())
}
