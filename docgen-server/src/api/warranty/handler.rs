//! Warranty API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::ApiResponse;
use shared::models::{WarrantyContractData, WarrantyDocumentType, WarrantyGenerateRequest};

use crate::api::{TypeOption, ok};
use crate::calc::money::round_money;
use crate::core::ServerState;
use crate::documents::variables::warranty_variables;
use crate::documents::{GeneratedDocument, TemplateRef, pack_documents};
use crate::utils::format::add_years;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_date, validate_positive_amount,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

const ARCHIVE_NAME: &str = "warranty_docs.zip";

/// 校验请求，返回质保开始日期与合同金额
fn validate_request(req: &WarrantyGenerateRequest) -> Result<(NaiveDate, Decimal), AppError> {
    let start = validate_date(&req.warranty_start_date, "warrantyStartDate")?;

    let data: &WarrantyContractData = &req.contract_data;
    validate_required_text(&data.contract_no, "contractNo", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.contract_name, "contractName", MAX_NAME_LEN)?;
    validate_required_text(&data.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_required_text(&data.project_name, "projectName", MAX_NAME_LEN)?;
    let contract_amount = validate_positive_amount(data.contract_amount, "contractAmount")?;

    if req.selected_docs.is_empty() {
        return Err(AppError::new(ErrorCode::NoDocumentsSelected));
    }
    if req.warranty_period == Some(0) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "warrantyPeriod must be at least 1 year",
        )
        .with_detail("field", "warrantyPeriod"));
    }
    Ok((start, contract_amount))
}

/// 去重并保持选择顺序
fn dedup_docs(selected: &[WarrantyDocumentType]) -> Vec<WarrantyDocumentType> {
    let mut docs = Vec::with_capacity(selected.len());
    for doc in selected {
        if !docs.contains(doc) {
            docs.push(*doc);
        }
    }
    docs
}

/// POST /api/warranty/generate - 生成质保金文档
///
/// 只选一个文档时直接返回该文件，多个时打包为 zip
pub async fn generate(
    State(state): State<ServerState>,
    payload: Result<Json<WarrantyGenerateRequest>, JsonRejection>,
) -> AppResult<GeneratedDocument> {
    let Json(req) = payload?;
    let (start, contract_amount) = validate_request(&req)?;

    let period = req
        .warranty_period
        .unwrap_or(state.config.warranty_period_years);
    let end = add_years(start, period).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Warranty end date out of range ({period} years from {start})"),
        )
    })?;

    let data = &req.contract_data;
    let amount = round_money(contract_amount * state.ratios.warranty_retention);
    let today = chrono::Local::now().date_naive();
    let variables = warranty_variables(data, contract_amount, amount, start, end, period, today);

    let docs = dedup_docs(&req.selected_docs);
    let mut outputs = Vec::with_capacity(docs.len());
    for (i, doc) in docs.iter().enumerate() {
        let bytes = state
            .render_document(TemplateRef::Warranty(*doc), &variables)
            .await?;
        outputs.push(GeneratedDocument::new(
            format!("warranty_doc_{}.{}", i + 1, doc.extension()),
            bytes,
        ));
    }

    tracing::info!(
        contract_no = %data.contract_no,
        documents = outputs.len(),
        "Warranty documents generated"
    );

    match <[GeneratedDocument; 1]>::try_from(outputs) {
        Ok([single]) => {
            let ext = docs[0].extension();
            Ok(GeneratedDocument::new(format!("warranty_doc.{ext}"), single.bytes))
        }
        Err(outputs) => Ok(GeneratedDocument::new(
            ARCHIVE_NAME,
            pack_documents(&outputs)?,
        )),
    }
}

/// GET /api/warranty/document-types - 文档类型列表
pub async fn document_types() -> Json<ApiResponse<Vec<TypeOption>>> {
    ok(WarrantyDocumentType::ALL
        .iter()
        .map(|d| TypeOption {
            value: d.as_str(),
            label: d.label(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> WarrantyGenerateRequest {
        WarrantyGenerateRequest {
            warranty_start_date: "2024-03-01".into(),
            contract_data: WarrantyContractData {
                contract_no: "HT-5".into(),
                contract_name: "机房合同".into(),
                customer_name: "华为".into(),
                project_name: "机房".into(),
                contract_amount: 100000.0,
                ..Default::default()
            },
            selected_docs: vec![WarrantyDocumentType::Certificate],
            warranty_period: None,
        }
    }

    #[test]
    fn test_validate_request() {
        assert_eq!(
            validate_request(&request()).unwrap(),
            (
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                Decimal::new(100000, 0)
            )
        );

        let mut huge_amount = request();
        huge_amount.contract_data.contract_amount = 1e30;
        assert_eq!(
            validate_request(&huge_amount).unwrap_err().code,
            ErrorCode::InvalidContractAmount
        );

        let mut bad_date = request();
        bad_date.warranty_start_date = "2024/03/01".into();
        assert_eq!(
            validate_request(&bad_date).unwrap_err().code,
            ErrorCode::InvalidDate
        );

        let mut no_docs = request();
        no_docs.selected_docs.clear();
        assert_eq!(
            validate_request(&no_docs).unwrap_err().code,
            ErrorCode::NoDocumentsSelected
        );

        let mut zero_period = request();
        zero_period.warranty_period = Some(0);
        assert_eq!(
            validate_request(&zero_period).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn test_dedup_docs() {
        use WarrantyDocumentType::*;
        assert_eq!(
            dedup_docs(&[DeductionList, Certificate, DeductionList]),
            vec![DeductionList, Certificate]
        );
    }
}
