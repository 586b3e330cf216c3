use crate::quadtree::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// quadtree 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadTreeConfig {
    /// 树的区域与分裂参数
    pub tree: TreeConfig,

    /// 演示程序参数
    pub demo: DemoConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 树配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// 区域宽度
    #[serde(default = "default_extent")]
    pub width: f64,

    /// 区域高度
    #[serde(default = "default_extent")]
    pub height: f64,

    /// 最大分裂深度，到达该深度的叶子可以持有多个点
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// 演示程序配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 随机生成的点数
    #[serde(default = "default_points")]
    pub points: usize,

    /// 随机数种子，不设置时每次运行结果不同
    pub seed: Option<u64>,

    /// 每次插入后是否打印整棵树
    #[serde(default = "default_print_tree")]
    pub print_tree: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_extent() -> f64 {
    128.0
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_points() -> usize {
    10
}

fn default_print_tree() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            max_depth: default_max_depth(),
        }
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            tree: TreeConfig::default(),
            demo: DemoConfig {
                points: default_points(),
                seed: None,
                print_tree: default_print_tree(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl QuadTreeConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（QUADTREE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use quadtree::config::QuadTreeConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = QuadTreeConfig::from_file("quadtree.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("QUADTREE").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查区域大小、最大深度、日志级别和日志文件配置
    pub fn validate(&self) -> Result<(), String> {
        for (name, extent) in [("width", self.tree.width), ("height", self.tree.height)] {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(format!(
                    "Tree {} must be a positive finite number, got {}",
                    name, extent
                ));
            }
        }

        if self.tree.max_depth == 0 {
            return Err("Tree max_depth must be at least 1".to_string());
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_none() => {
                return Err("Log output is 'file' but log_file path is not specified".to_string());
            }
            "file" => {}
            other => {
                return Err(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                ))
            }
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 QuadTree Configuration:");
        println!("   Region:      {} x {}", self.tree.width, self.tree.height);
        println!("   Max Depth:   {}", self.tree.max_depth);
        println!();
        println!("   Points:      {}", self.demo.points);
        match self.demo.seed {
            Some(seed) => println!("   Seed:        {}", seed),
            None => println!("   Seed:        random"),
        }
        println!();
        println!("   Log Level:   {}", self.logging.level);
        println!("   Log Output:  {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:    {}", log_file.display());
        }
        println!();
    }
}
