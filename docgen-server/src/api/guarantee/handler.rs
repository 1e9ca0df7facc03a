//! Guarantee API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::error::ApiResponse;
use shared::models::{
    GuaranteeCalculateRequest, GuaranteeCalculation, GuaranteeContractData,
    GuaranteeGenerateRequest, GuaranteeKind,
};

use crate::api::{TypeOption, ok};
use crate::calc::money::{format_percent, format_simple, to_f64};
use crate::calc::{GuaranteeInput, compute_guarantee_amount, guarantee_ratio};
use crate::calc::numeral::to_chinese_currency_words;
use crate::core::ServerState;
use crate::documents::variables::guarantee_variables;
use crate::documents::{GeneratedDocument, TemplateRef};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, parse_decimal, validate_positive_amount,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn parse_custom_ratio(ratio: Option<f64>) -> Result<Option<Decimal>, AppError> {
    ratio
        .map(|r| parse_decimal(r, "customRatio", ErrorCode::InvalidRatio))
        .transpose()
}

/// 比例与金额
fn compute(state: &ServerState, input: &GuaranteeInput) -> AppResult<(Decimal, Decimal)> {
    let ratio = guarantee_ratio(&state.ratios, input)?;
    let amount = compute_guarantee_amount(&state.ratios, input)?;
    Ok((ratio, amount))
}

/// POST /api/guarantee/calculate - 计算保函金额
pub async fn calculate(
    State(state): State<ServerState>,
    payload: Result<Json<GuaranteeCalculateRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<GuaranteeCalculation>>> {
    let Json(req) = payload?;
    let input = GuaranteeInput::new(
        req.template_type,
        req.guarantee_type,
        validate_positive_amount(req.contract_amount, "contractAmount")?,
    )
    .with_custom_ratio(parse_custom_ratio(req.custom_ratio)?);
    let (ratio, amount) = compute(&state, &input)?;

    Ok(ok(GuaranteeCalculation {
        amount: to_f64(amount),
        ratio: ratio.to_f64().unwrap_or_default(),
        ratio_text: format_percent(ratio),
        amount_in_words: to_chinese_currency_words(amount),
        amount_in_simple: format_simple(amount),
    }))
}

/// 校验合同数据，返回合同金额
fn validate_contract_data(data: &GuaranteeContractData) -> Result<Decimal, AppError> {
    validate_required_text(&data.contract_no, "contractNo", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.customer_name, "customerName", MAX_NAME_LEN)?;
    let contract_amount = validate_positive_amount(data.contract_amount, "contractAmount")?;
    validate_required_text(&data.validity_period, "validityPeriod", MAX_SHORT_TEXT_LEN)?;
    Ok(contract_amount)
}

/// POST /api/guarantee/generate - 生成保函申请
pub async fn generate(
    State(state): State<ServerState>,
    payload: Result<Json<GuaranteeGenerateRequest>, JsonRejection>,
) -> AppResult<GeneratedDocument> {
    let Json(req) = payload?;
    let data = &req.contract_data;
    let contract_amount = validate_contract_data(data)?;

    // 自定义比例来自合同保函信息
    let custom_ratio = data
        .guarantee_info
        .as_ref()
        .and_then(|info| info.ratio_for(req.guarantee_type));
    let input = GuaranteeInput::new(req.template_type, req.guarantee_type, contract_amount)
        .with_custom_ratio(parse_custom_ratio(custom_ratio)?);
    let (ratio, amount) = compute(&state, &input)?;

    let today = chrono::Local::now().date_naive();
    let variables = guarantee_variables(data, &input, amount, ratio, today);
    let bytes = state
        .render_document(
            TemplateRef::Guarantee(req.template_type, req.guarantee_type),
            &variables,
        )
        .await?;

    tracing::info!(
        contract_no = %data.contract_no,
        template = %req.template_type,
        guarantee = %req.guarantee_type,
        amount = %amount,
        "Guarantee application generated"
    );

    let file_name = format!(
        "保函申请_{}_{}.docx",
        req.guarantee_type.label(),
        chrono::Local::now().format("%Y%m%d%H%M%S")
    );
    Ok(GeneratedDocument::new(file_name, bytes))
}

/// GET /api/guarantee/types - 保函类型列表
pub async fn types() -> Json<ApiResponse<Vec<TypeOption>>> {
    ok(GuaranteeKind::ALL
        .iter()
        .map(|k| TypeOption {
            value: k.as_str(),
            label: k.label(),
        })
        .collect())
}
