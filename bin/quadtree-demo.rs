use clap::Parser;
use colored::*;
use quadtree::config::LoggingConfig;
use quadtree::{Node, Point, QuadTree, QuadTreeConfig, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "quadtree.toml")]
    config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    generate_config: bool,

    /// Number of random points to insert (overrides config file)
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Random seed (overrides config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Region width (overrides config file)
    #[arg(long)]
    width: Option<f64>,

    /// Region height (overrides config file)
    #[arg(long)]
    height: Option<f64>,

    /// Maximum subdivision depth (overrides config file)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// 只打印最终的树
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 生成默认配置文件
    if args.generate_config {
        let config = QuadTreeConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置
    let mut config = QuadTreeConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(points) = args.points {
        config.demo.points = points;
    }
    if let Some(seed) = args.seed {
        config.demo.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.tree.width = width;
    }
    if let Some(height) = args.height {
        config.tree.height = height;
    }
    if let Some(max_depth) = args.max_depth {
        config.tree.max_depth = max_depth;
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }
    if args.quiet {
        config.demo.print_tree = false;
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging)?;

    info!("🌳 Starting quadtree demo");
    info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    let points = generate_points(&config);
    let mut tree = QuadTree::with_config(Vec::new(), &config.tree);

    for (i, point) in points.into_iter().enumerate() {
        println!("{} {}", "Add".bold(), point);
        tree.add_node(point)?;
        tree.assert_correct()?;

        if config.demo.print_tree {
            print_tree(&tree);
        }

        if tree.size() != i + 1 {
            return Err(format!("Expected size {} but tree reports {}", i + 1, tree.size()).into());
        }
    }

    if !config.demo.print_tree {
        print_tree(&tree);
    }

    if let Err(e) = tree.validate() {
        warn!("⚠️  Full validation failed: {}", e);
    }

    info!(
        "✅ Inserted {} points into {} leaves (depth {})",
        tree.size(),
        tree.leaf_count(),
        tree.depth()
    );

    Ok(())
}

/// 在 [0, width] × [0, height] 内生成整数坐标的随机点
fn generate_points(config: &QuadTreeConfig) -> Vec<Point> {
    let mut rng = match config.demo.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..config.demo.points)
        .map(|_| {
            let x = rng.gen_range(0.0..=config.tree.width).floor();
            let y = rng.gen_range(0.0..=config.tree.height).floor();
            Point::new(x, y)
        })
        .collect()
}

/// 按前序遍历打印每个节点
fn print_tree(tree: &QuadTree) {
    for node in tree {
        println!("{}", format_node(node));
    }
    println!();
}

fn format_node(node: &Node) -> String {
    let text = node.to_string();
    if !node.is_leaf() {
        text.blue().to_string()
    } else if node.is_empty() {
        text.dimmed().to_string()
    } else {
        text.green().to_string()
    }
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }

    Ok(())
}
