//! Payment API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::error::ApiResponse;
use shared::models::{
    CustomerClass, PaymentCalculateRequest, PaymentCalculation, PaymentContractData,
    PaymentGenerateRequest, PaymentKind,
};

use crate::api::{TypeOption, ok};
use crate::calc::money::to_f64;
use crate::calc::{PaymentCalculationResult, PaymentInput, compute_payment};
use crate::core::ServerState;
use crate::documents::variables::payment_variables;
use crate::documents::{GeneratedDocument, TemplateRef};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, parse_optional_amount, validate_positive_amount,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

impl From<PaymentCalculationResult> for PaymentCalculation {
    fn from(result: PaymentCalculationResult) -> Self {
        Self {
            amount: to_f64(result.amount),
            amount_in_words: result.amount_in_words,
            amount_in_simple: result.amount_in_simple,
            calculation_formula: result.calculation_formula,
        }
    }
}

/// POST /api/payment/calculate - 计算付款金额
pub async fn calculate(
    State(state): State<ServerState>,
    payload: Result<Json<PaymentCalculateRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<PaymentCalculation>>> {
    let Json(req) = payload?;
    let input = PaymentInput::new(
        req.customer_type,
        req.payment_type,
        validate_positive_amount(req.contract_amount, "contractAmount")?,
    )
    .with_progress(
        parse_optional_amount(req.current_investment, "currentInvestment")?,
        parse_optional_amount(req.previously_paid, "previouslyPaid")?,
    );
    let result = compute_payment(&state.ratios, &input)?;

    tracing::debug!(
        customer = %req.customer_type,
        payment = %req.payment_type,
        amount = %result.amount,
        "Payment calculated"
    );
    Ok(ok(result.into()))
}

/// 校验合同数据，返回计算输入
fn validate_contract_data(
    data: &PaymentContractData,
    class: CustomerClass,
    kind: PaymentKind,
) -> Result<PaymentInput, AppError> {
    validate_required_text(&data.contract_no, "contractNo", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.customer_name, "customerName", MAX_NAME_LEN)?;
    let contract_amount = validate_positive_amount(data.contract_amount, "contractAmount")?;

    if class.is_progressive() {
        for (field, value) in [
            ("currentInvestment", data.current_investment),
            ("previouslyPaid", data.previously_paid),
        ] {
            if value.is_none() {
                return Err(AppError::with_message(
                    ErrorCode::MissingProgressiveField,
                    format!("{field} is required for progress-based customers"),
                )
                .with_detail("field", field));
            }
        }
    }
    Ok(PaymentInput::new(class, kind, contract_amount).with_progress(
        parse_optional_amount(data.current_investment, "currentInvestment")?,
        parse_optional_amount(data.previously_paid, "previouslyPaid")?,
    ))
}

/// POST /api/payment/generate - 生成付款申请
pub async fn generate(
    State(state): State<ServerState>,
    payload: Result<Json<PaymentGenerateRequest>, JsonRejection>,
) -> AppResult<GeneratedDocument> {
    let Json(req) = payload?;
    let data = &req.contract_data;
    let input = validate_contract_data(data, req.template_type, req.payment_type)?;
    let result = compute_payment(&state.ratios, &input)?;
    let ratio = state
        .ratios
        .payment_ratio(req.template_type, req.payment_type)
        .unwrap_or_default();

    let today = chrono::Local::now().date_naive();
    let variables = payment_variables(data, &input, ratio, &result, today);
    let bytes = state
        .render_document(
            TemplateRef::Payment(req.template_type, req.payment_type),
            &variables,
        )
        .await?;

    tracing::info!(
        contract_no = %data.contract_no,
        customer = %req.template_type,
        payment = %req.payment_type,
        "Payment application generated"
    );

    let file_name = format!(
        "付款申请_{}_{}.docx",
        req.payment_type.label(),
        chrono::Local::now().format("%Y%m%d%H%M%S")
    );
    Ok(GeneratedDocument::new(file_name, bytes))
}

/// GET /api/payment/types - 付款类型列表
pub async fn types() -> Json<ApiResponse<Vec<TypeOption>>> {
    ok(PaymentKind::ALL
        .iter()
        .map(|k| TypeOption {
            value: k.as_str(),
            label: k.label(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> PaymentContractData {
        PaymentContractData {
            contract_no: "HT-001".into(),
            customer_name: "华为".into(),
            contract_amount: 1000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_contract_data() {
        use CustomerClass::{Huawei, WorksBureau};
        let input = validate_contract_data(&data(), WorksBureau, PaymentKind::Advance).unwrap();
        assert_eq!(input.contract_amount, rust_decimal::Decimal::new(1000, 0));

        let err = validate_contract_data(&data(), Huawei, PaymentKind::Delivery).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingProgressiveField);

        let progressive = PaymentContractData {
            current_investment: Some(500.0),
            previously_paid: Some(0.0),
            ..data()
        };
        let input = validate_contract_data(&progressive, Huawei, PaymentKind::Delivery).unwrap();
        assert_eq!(input.current_investment, Some(rust_decimal::Decimal::new(500, 0)));

        let missing_no = PaymentContractData {
            contract_no: String::new(),
            ..data()
        };
        let err =
            validate_contract_data(&missing_no, WorksBureau, PaymentKind::Advance).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_validate_contract_data_rejects_huge_amounts() {
        let huge_investment = PaymentContractData {
            current_investment: Some(1e30),
            previously_paid: Some(0.0),
            ..data()
        };
        let err =
            validate_contract_data(&huge_investment, CustomerClass::Huawei, PaymentKind::Delivery)
                .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);

        let huge_contract = PaymentContractData {
            contract_amount: 1e30,
            ..data()
        };
        let err =
            validate_contract_data(&huge_contract, CustomerClass::WorksBureau, PaymentKind::Advance)
                .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidContractAmount);
    }
}
