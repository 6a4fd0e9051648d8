use abno_catalog_common::{Filter, SortKey};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "abno-catalog")]
#[command(about = "アブノーマリティ図鑑 CLIクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先URL（省略時は環境変数ABNO_CATALOG_URLまたは設定ファイル）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを一覧表示
    List {
        /// 並び順 (risk-desc/risk-asc/rating-desc/rating-asc/name-asc/name-desc)
        #[arg(short, long, default_value = "risk-desc")]
        sort: SortKey,

        /// 絞り込み (all/favorites)
        #[arg(short, long, default_value = "all")]
        filter: Filter,

        /// 名前またはIDで検索
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },

    /// 詳細を表示
    Show {
        /// アブノーマリティID
        #[arg(required = true)]
        id: String,

        /// 脱走情報タブを表示
        #[arg(short, long)]
        breach: bool,
    },

    /// 評価を送信（1〜5）
    Rate {
        /// アブノーマリティID
        #[arg(required = true)]
        id: String,

        /// 評価
        #[arg(required = true, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },

    /// お気に入りを切り替え
    Favorite {
        /// アブノーマリティID
        #[arg(required = true)]
        id: String,
    },

    /// お気に入りを表示/全削除
    Favorites {
        /// 全て削除
        #[arg(long)]
        clear: bool,

        /// 確認せずに削除
        #[arg(short, long)]
        yes: bool,
    },

    /// 匿名ユーザーIDを表示
    Whoami,

    /// 設定を表示/編集
    Config {
        /// 接続先URLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
