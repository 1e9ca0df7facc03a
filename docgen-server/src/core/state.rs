use std::sync::Arc;
use std::time::Instant;

use crate::calc::RatioTable;
use crate::core::Config;
use crate::documents::{
    OoxmlRenderer, TemplateRef, TemplateRenderer, TemplateStore, TemplateVariables,
};
use crate::store::{ContractStore, InMemoryContractStore};
use crate::utils::AppResult;

/// 服务器状态 - 持有所有协作者的共享引用
///
/// 使用 Arc 实现浅拷贝，clone 成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | ratios | Arc<RatioTable> | 比例表，计算与模板变量共用 |
/// | templates | TemplateStore | 模板目录 |
/// | renderer | Arc<dyn TemplateRenderer> | 模板渲染器 |
/// | contracts | Arc<dyn ContractStore> | 当前合同存储 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub ratios: Arc<RatioTable>,
    pub templates: TemplateStore,
    pub renderer: Arc<dyn TemplateRenderer>,
    pub contracts: Arc<dyn ContractStore>,
    started_at: Instant,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("templates", &self.templates)
            .field("contracts", &self.contracts)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 使用默认协作者初始化: 默认比例表、OOXML 渲染器、内存合同存储
    pub fn initialize(config: &Config) -> Self {
        let templates = TemplateStore::new(&config.templates_dir);
        if !templates.root().is_dir() {
            tracing::warn!(
                templates_dir = %templates.root().display(),
                "Templates directory does not exist, document generation will fail"
            );
        }

        Self {
            config: config.clone(),
            ratios: Arc::new(RatioTable::default()),
            templates,
            renderer: Arc::new(OoxmlRenderer::new()),
            contracts: Arc::new(InMemoryContractStore::new()),
            started_at: Instant::now(),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_contract_store(mut self, contracts: Arc<dyn ContractStore>) -> Self {
        self.contracts = contracts;
        self
    }

    pub fn with_ratios(mut self, ratios: RatioTable) -> Self {
        self.ratios = Arc::new(ratios);
        self
    }

    /// 读取模板并渲染
    pub async fn render_document(
        &self,
        template: TemplateRef,
        variables: &TemplateVariables,
    ) -> AppResult<Vec<u8>> {
        let bytes = self.templates.load(&template).await?;
        let output = self.renderer.render(&bytes, variables)?;
        tracing::info!(
            template = %template.relative_path().display(),
            variables = variables.len(),
            size = output.len(),
            "Document rendered"
        );
        Ok(output)
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
