// ==========================================
// 设备可靠性分析 - 命令行入口
// ==========================================
// 子命令: report / load / simulate / dq
// 输入: JSON 快照或 CSV 快照 (设备 + 工单)
// 输出: JSON (默认) 或本地化文本
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use maintenance_reliability::api::{LevelingRequest, ReliabilityApi, ReportRequest};
use maintenance_reliability::config::ConfigManager;
use maintenance_reliability::domain::MaintenanceSnapshot;
use maintenance_reliability::i18n::{compliance_label, set_locale, t, t_with_args};
use maintenance_reliability::importer::SnapshotLoader;
use maintenance_reliability::{logging, CriticalityFilter, LevelingStrategy};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "reliability-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "设备可靠性 KPI 与预防性维修负荷均衡", long_about = None)]
struct Cli {
    /// JSON 快照文件 ({equipment, workOrders})
    #[arg(long, global = true, conflicts_with_all = ["equipment_csv", "work_orders_csv"])]
    snapshot: Option<PathBuf>,

    /// 设备 CSV 文件
    #[arg(long, global = true, requires = "work_orders_csv")]
    equipment_csv: Option<PathBuf>,

    /// 工单 CSV 文件
    #[arg(long, global = true, requires = "equipment_csv")]
    work_orders_csv: Option<PathBuf>,

    /// 配置文件 (JSON key-value)
    #[arg(long, global = true, env = "RELIABILITY_CONFIG")]
    config: Option<PathBuf>,

    /// 输出格式
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// 文本输出语言 (zh-CN / en)
    #[arg(long, global = true, default_value = "zh-CN")]
    lang: String,

    /// 输出 JSON 格式日志
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 可靠性报告
    Report {
        /// 区间起始 (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// 区间结束 (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// 设备ID (可重复, 缺省为全部设备)
        #[arg(long = "equipment")]
        equipment_ids: Vec<String>,

        #[arg(long, value_enum, default_value_t = CriticalityArg::All)]
        criticality: CriticalityArg,
    },

    /// 月度预防性任务负荷
    Load {
        #[arg(long)]
        year: i32,
    },

    /// 负荷均衡模拟 (仅输出提案草稿, 不修改输入, 不提交)
    Simulate {
        #[arg(long)]
        year: i32,

        #[arg(long, value_enum, default_value_t = StrategyArg::Gentle)]
        strategy: StrategyArg,

        /// 提案草稿写出路径 (未经审批, 仅供复核; 提交需走 CommitGate 审批)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 工单数据质量扫描
    Dq,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum CriticalityArg {
    All,
    CriticalOnly,
    NonCriticalOnly,
}

impl From<CriticalityArg> for CriticalityFilter {
    fn from(arg: CriticalityArg) -> Self {
        match arg {
            CriticalityArg::All => CriticalityFilter::All,
            CriticalityArg::CriticalOnly => CriticalityFilter::CriticalOnly,
            CriticalityArg::NonCriticalOnly => CriticalityFilter::NonCriticalOnly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Gentle,
    Aggressive,
}

impl From<StrategyArg> for LevelingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Gentle => LevelingStrategy::Gentle,
            StrategyArg::Aggressive => LevelingStrategy::Aggressive,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logging::init_json();
    } else {
        logging::init();
    }
    set_locale(&cli.lang);

    info!(version = maintenance_reliability::VERSION, "设备可靠性分析启动");

    let config = match &cli.config {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("无法加载配置: {}", path.display()))?,
        None => ConfigManager::new(),
    }
    .load_engine_config()?;

    let snapshot = load_snapshot(&cli)?;
    let all_ids = snapshot.equipment_ids();
    let api = ReliabilityApi::new(snapshot, &config);

    match cli.command {
        Commands::Report {
            start,
            end,
            equipment_ids,
            criticality,
        } => {
            let request = ReportRequest {
                equipment_ids: if equipment_ids.is_empty() {
                    all_ids
                } else {
                    equipment_ids
                },
                start_date: start,
                end_date: end,
                criticality_filter: criticality.into(),
            };
            let response = api.build_report(&request)?;
            if cli.format == OutputFormat::Json {
                print_json(&response)?;
            } else {
                print_report_text(&request, &response);
            }
        }
        Commands::Load { year } => {
            let response = api.monthly_load(year)?;
            if cli.format == OutputFormat::Json {
                print_json(&response)?;
            } else {
                println!(
                    "{}",
                    t_with_args(
                        "load.header",
                        &[("year", year.to_string().as_str()), ("limit", response.capacity_limit.to_string().as_str())]
                    )
                );
                for (index, load) in response.monthly_load.iter().enumerate() {
                    let flag = if response.overloaded_months.contains(&(index as u32)) {
                        t("load.overloaded")
                    } else {
                        String::new()
                    };
                    println!(
                        "{}",
                        t_with_args(
                            "load.row",
                            &[
                                ("month", (index + 1).to_string().as_str()),
                                ("load", load.to_string().as_str()),
                                ("flag", flag.as_str()),
                            ]
                        )
                    );
                }
            }
        }
        Commands::Simulate {
            year,
            strategy,
            output,
        } => {
            let proposal = api.simulate_leveling(&LevelingRequest {
                year,
                strategy: strategy.into(),
            })?;

            if let Some(path) = output {
                let raw = serde_json::to_string_pretty(&proposal.plans)?;
                std::fs::write(&path, raw)
                    .with_context(|| format!("无法写出提案: {}", path.display()))?;
                info!(path = %path.display(), "提案草稿已写出 (未经审批, 未提交)");
            }

            if cli.format == OutputFormat::Json {
                print_json(&proposal)?;
            } else {
                println!(
                    "{}",
                    t_with_args(
                        "simulate.header",
                        &[("year", year.to_string().as_str()), ("strategy", proposal.strategy.to_string().as_str())]
                    )
                );
                if proposal.is_noop() {
                    println!("{}", t("simulate.noop"));
                }
                for m in &proposal.moves {
                    println!(
                        "{}",
                        t_with_args(
                            "simulate.move",
                            &[
                                ("task", m.task_id.as_str()),
                                ("equipment", m.equipment_id.as_str()),
                                ("from", m.from_date.to_string().as_str()),
                                ("to", m.to_date.to_string().as_str()),
                                ("offset", m.offset_months.to_string().as_str()),
                            ]
                        )
                    );
                }
            }
        }
        Commands::Dq => {
            let report = api.scan_data_quality();
            if cli.format == OutputFormat::Json {
                print_json(&report)?;
            } else {
                println!(
                    "{}",
                    t_with_args(
                        "dq.header",
                        &[
                            ("total", report.summary.total_orders.to_string().as_str()),
                            ("error", report.summary.error.to_string().as_str()),
                            ("warning", report.summary.warning.to_string().as_str()),
                            ("info", report.summary.info.to_string().as_str()),
                        ]
                    )
                );
                for v in &report.violations {
                    println!(
                        "{}",
                        t_with_args(
                            "dq.row",
                            &[
                                ("level", format!("{:?}", v.level).as_str()),
                                ("order", v.work_order_id.as_str()),
                                ("equipment", v.equipment_id.as_str()),
                                ("field", v.field.as_str()),
                                ("message", v.message.as_str()),
                            ]
                        )
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_snapshot(cli: &Cli) -> Result<MaintenanceSnapshot> {
    match (&cli.snapshot, &cli.equipment_csv, &cli.work_orders_csv) {
        (Some(path), _, _) => SnapshotLoader::load_json(path)
            .with_context(|| format!("无法加载快照: {}", path.display())),
        (None, Some(equipment), Some(orders)) => SnapshotLoader::load_csv(equipment, orders)
            .context("无法加载 CSV 快照"),
        _ => bail!("需要 --snapshot 或 --equipment-csv + --work-orders-csv"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report_text(
    request: &ReportRequest,
    response: &maintenance_reliability::api::ReportResponse,
) {
    let none = t("common.none");
    println!(
        "{}",
        t_with_args(
            "report.header",
            &[
                ("start", request.start_date.to_string().as_str()),
                ("end", request.end_date.to_string().as_str()),
            ]
        )
    );

    for r in &response.reports {
        let mtbf = r.mtbf.map(|v| format!("{:.1}", v)).unwrap_or_else(|| none.clone());
        println!(
            "{}",
            t_with_args(
                "report.row",
                &[
                    ("id", r.equipment_id.as_str()),
                    ("name", r.equipment_name.as_str()),
                    ("mttr", format!("{:.2}", r.mttr).as_str()),
                    ("mtbf", mtbf.as_str()),
                    ("availability", format!("{:.1}", r.availability).as_str()),
                    ("global", format!("{:.1}", r.global_availability).as_str()),
                    ("failures", r.total_failures.to_string().as_str()),
                    ("compliance", compliance_label(r.compliance_status).as_str()),
                ]
            )
        );
        if let Some(flag) = &r.recurrent_failure {
            println!(
                "  {}",
                t_with_args(
                    "report.recurrent",
                    &[("category", flag.category.as_str()), ("count", flag.count.to_string().as_str())]
                )
            );
        }
    }

    let p = &response.portfolio;
    println!(
        "{}",
        t_with_args(
            "report.portfolio",
            &[
                ("count", p.equipment_count.to_string().as_str()),
                ("failures", p.total_failures.to_string().as_str()),
                ("mttr", format!("{:.2}", p.mttr).as_str()),
                ("approved", p.approved_count.to_string().as_str()),
                ("rejected", p.rejected_count.to_string().as_str()),
            ]
        )
    );
}
