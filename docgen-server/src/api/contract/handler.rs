//! Contract API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use rust_decimal::Decimal;
use shared::error::ApiResponse;
use shared::models::{ContractInfo, ContractPayload, ContractRecord, PaymentTerm};

use crate::api::ok;
use crate::calc::money::{MONEY_TOLERANCE, to_decimal};
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_positive_amount, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// 保存时的最低要求: 编号、客户、项目
fn validate_identity(info: &ContractInfo) -> Result<(), AppError> {
    validate_required_text(&info.contract_no, "contractNo", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&info.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_required_text(&info.project_name, "projectName", MAX_NAME_LEN)?;
    Ok(())
}

/// 创建时所有合同字段必填
fn validate_full(info: &ContractInfo) -> Result<(), AppError> {
    validate_identity(info)?;
    validate_required_text(&info.contract_name, "contractName", MAX_NAME_LEN)?;
    validate_required_text(&info.sign_date, "signDate", MAX_SHORT_TEXT_LEN)?;
    validate_positive_amount(info.amount, "amount")?;
    Ok(())
}

/// 付款比例 (百分数) 各自在 0-100 之间，合计 100
fn validate_payment_terms(terms: &[PaymentTerm]) -> Result<(), AppError> {
    let mut total = Decimal::ZERO;
    for term in terms {
        let ratio = to_decimal(term.ratio)
            .filter(|r| (Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(r))
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidRatio,
                    format!("Ratio of payment term {} must be between 0 and 100", term.kind),
                )
                .with_detail("type", term.kind.as_str())
            })?;
        total += ratio;
    }

    if (total - Decimal::ONE_HUNDRED).abs() > MONEY_TOLERANCE {
        return Err(AppError::new(ErrorCode::PaymentTermsInvalid)
            .with_detail("total", total.to_string()));
    }
    Ok(())
}

fn new_record(payload: ContractPayload) -> ContractRecord {
    ContractRecord::from_payload(
        uuid::Uuid::new_v4().to_string(),
        payload,
        chrono::Utc::now().timestamp_millis(),
    )
}

/// POST /api/contract - 校验合同并生成记录
pub async fn create(
    payload: Result<Json<ContractPayload>, JsonRejection>,
) -> AppResult<Json<ApiResponse<ContractRecord>>> {
    let Json(payload) = payload?;
    validate_full(&payload.contract_info)?;
    validate_payment_terms(&payload.payment_terms)?;

    let record = new_record(payload);
    tracing::info!(
        id = %record.id,
        contract_no = %record.contract_info.contract_no,
        "Contract created"
    );
    Ok(Json(ApiResponse::success_with_message(
        "Contract created successfully",
        record,
    )))
}

/// POST /api/contract/save - 保存当前合同
pub async fn save(
    State(state): State<ServerState>,
    payload: Result<Json<ContractPayload>, JsonRejection>,
) -> AppResult<Json<ApiResponse<ContractRecord>>> {
    let Json(payload) = payload?;
    validate_identity(&payload.contract_info)?;

    let record = new_record(payload);
    let saved = state.contracts.save(record);
    tracing::info!(
        id = %saved.id,
        contract_no = %saved.contract_info.contract_no,
        "Contract saved"
    );
    Ok(Json(ApiResponse::success_with_message(
        "Contract saved successfully",
        saved,
    )))
}

/// GET /api/contract/current - 获取当前合同
pub async fn current(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<ContractRecord>>> {
    state
        .contracts
        .current()
        .map(ok)
        .ok_or_else(|| AppError::new(ErrorCode::ContractNotFound))
}
