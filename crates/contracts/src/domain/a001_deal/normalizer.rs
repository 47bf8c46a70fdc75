//! Raw PageLoad payload -> canonical [`DealRecord`].
//!
//! Purely declarative field-by-field mapping: once the nested `data`
//! object is confirmed, every field is coerced independently with its
//! own default, so partial or mistyped data never aborts the parse.

use serde_json::{Map, Value};

use super::aggregate::DealRecord;
use crate::shared::coerce::{
    coerce_bool, coerce_number, coerce_string, coerce_string_or_null, coerce_subform, coerce_user,
};

const NULL: Value = Value::Null;

fn field<'a>(data: &'a Map<String, Value>, name: &str) -> &'a Value {
    data.get(name).unwrap_or(&NULL)
}

/// Разобрать сырой payload PageLoad-события.
///
/// `None` только когда в payload нет пригодного объекта `data` — это
/// единственный отказ нормализатора и он repor­table, не panic.
pub fn parse_deal_record(raw: &Value) -> Option<DealRecord> {
    let data = raw.as_object()?.get("data")?.as_object()?;

    Some(DealRecord {
        id: coerce_string(field(data, "id"), "unknown"),
        deal_name: coerce_string(field(data, "Deal_Name"), "Unknown Deal"),

        account_name: coerce_user(field(data, "Account_Name"), "Unknown Account"),
        owner: coerce_user(field(data, "Owner"), "Unknown Owner"),
        created_by: coerce_user(field(data, "Created_By"), "Unknown Creator"),
        modified_by: coerce_user(field(data, "Modified_By"), "Unknown Modifier"),

        amount: coerce_number(field(data, "Amount"), 0.0),
        currency: coerce_string(field(data, "Currency"), "USD"),
        exchange_rate: coerce_string(field(data, "Exchange_Rate"), "1"),

        stage: coerce_string(field(data, "Stage"), "Unknown"),
        probability: coerce_number(field(data, "Probability"), 0.0),
        closing_date: coerce_string(field(data, "Closing_Date"), ""),

        subform_1: coerce_subform(field(data, "Subform_1")),

        contract_id_adivb_number: coerce_string_or_null(field(data, "Contract_ID_ADIVB_Number")),
        pm_request_id: coerce_string_or_null(field(data, "PM_Request_Id")),
        contract_product: coerce_bool(field(data, "Contract_Product")),
        group_product: coerce_bool(field(data, "Group_Product")),

        contract_signed_date: coerce_string_or_null(field(data, "Contract_Signed_Date")),
        counter_signed_date: coerce_string_or_null(field(data, "Counter_Signed_Date")),
        order_handoff_date: coerce_string_or_null(field(data, "Order_Handoff_Date")),
        project_completed_date: coerce_string_or_null(field(data, "Project_Completed_Date")),
        project_completed: coerce_string_or_null(field(data, "Project_Completed")),

        service_street: coerce_string_or_null(field(data, "Service_Street")),
        service_city: coerce_string_or_null(field(data, "Service_City")),
        service_state: coerce_string_or_null(field(data, "Service_State")),
        service_zip_code: coerce_string_or_null(field(data, "Service_Zip_Code")),
        timezone: coerce_string_or_null(field(data, "Timezone")),

        street: coerce_string_or_null(field(data, "Street")),
        city: coerce_string_or_null(field(data, "City")),
        state: coerce_string_or_null(field(data, "State")),
        zip_code1: coerce_string_or_null(field(data, "Zip_Code1")),

        circuit_id: coerce_string_or_null(field(data, "Circuit_Id")),
        mcn: coerce_string_or_null(field(data, "MCN")),
        mac_p: coerce_string_or_null(field(data, "MAC_P")),
        sub_account_id: coerce_string_or_null(field(data, "Sub_Account_ID")),
        federal_tax_id: coerce_string_or_null(field(data, "Federal_Tax_ID")),

        internet_provider_and_speed: coerce_string_or_null(field(
            data,
            "Internet_Provider_and_Speed_Free_Field",
        )),
        wireless_carrier_and_lines: coerce_string_or_null(field(
            data,
            "Wireless_Carrier_and_Number_of_Lines_Free_Field",
        )),
        phone_provider_and_lines: coerce_string_or_null(field(
            data,
            "Phone_Provider_and_Number_of_Lines_Free_Field",
        )),
        phone_system_make_model: coerce_string_or_null(field(data, "Phone_System_Make_Model")),

        deal_department: coerce_string_or_null(field(data, "Deal_Department")),
        deal_type: coerce_string_or_null(field(data, "Deal_Type")),
        deal_focus: coerce_string_or_null(field(data, "Deal_Focus")),
        lead_type: coerce_string_or_null(field(data, "Lead_Type")),
        lead_source: coerce_string_or_null(field(data, "Lead_Source")),

        product_type: coerce_string_or_null(field(data, "Product_Type")),
        data_interface_type: coerce_string_or_null(field(data, "Data_Interface_Type")),
        curent_services: coerce_string_or_null(field(data, "Curent_Services")),
        total_wireline: coerce_string_or_null(field(data, "Total_Wireline")),

        locked: coerce_bool(field(data, "Locked")),
        is_disconnected: coerce_bool(field(data, "Is_Disconnected")),
        managed: coerce_string_or_null(field(data, "Managed")),
        voice_handoff: coerce_string_or_null(field(data, "Voice_Handoff")),

        description: coerce_string_or_null(field(data, "Description")),
        layout_name: coerce_string_or_null(field(data, "Layout_Name")),
        layout: coerce_string_or_null(field(data, "Layout")),

        partner_vendor_1: coerce_user(field(data, "Partner_Vendor_1"), "Unknown"),
        partner_vendor_2: coerce_user(field(data, "Partner_Vendor_2"), "Unknown"),

        validated_by: coerce_string_or_null(field(data, "Validated_By")),
        processed_by: coerce_string_or_null(field(data, "Processed_By")),
        order_validation_link: coerce_string_or_null(field(data, "Order_Validation_Link")),

        workdrive_folder_url: coerce_string_or_null(field(
            data,
            "zohoworkdriveforcrm__Workdrive_Folder_URL",
        )),

        testing_trigger: coerce_bool(field(data, "Testing_trigger")),
        developer_space: coerce_bool(field(data, "Developer_Space")),

        sales_traction: coerce_string_or_null(field(data, "Sales_Traction")),
        forecast_category: coerce_string_or_null(field(data, "Forecast_Category__s")),

        account_number: coerce_string_or_null(field(data, "Account_Number")),
        campaign: coerce_string_or_null(field(data, "Campaign")),
        email_marketing_status: coerce_string_or_null(field(data, "Email_Marketing_Status")),

        with_call_paths: coerce_string_or_null(field(data, "With_Call_Paths")),
        porting_moving_tns: coerce_bool(field(data, "Porting_Moving_TNs")),

        previous_deal_disconnect: coerce_string_or_null(field(data, "Previous_Deal_Disconnect")),
        reason_for_closed_lost1: coerce_string_or_null(field(data, "Reason_for_Closed_Lost1")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{SubformShape, UserRef};
    use serde_json::json;

    #[test]
    fn rejects_payload_without_usable_data_object() {
        assert_eq!(parse_deal_record(&Value::Null), None);
        assert_eq!(parse_deal_record(&json!(42)), None);
        assert_eq!(parse_deal_record(&json!("data")), None);
        assert_eq!(parse_deal_record(&json!([1, 2, 3])), None);
        assert_eq!(parse_deal_record(&json!({})), None);
        assert_eq!(parse_deal_record(&json!({"data": null})), None);
        assert_eq!(parse_deal_record(&json!({"data": [1]})), None);
        assert_eq!(parse_deal_record(&json!({"data": "oops"})), None);
    }

    #[test]
    fn empty_data_yields_sentinel_defaults() {
        let deal = parse_deal_record(&json!({"data": {}})).unwrap();
        assert_eq!(deal.id, "unknown");
        assert_eq!(deal.deal_name, "Unknown Deal");
        assert_eq!(deal.amount, 0.0);
        assert_eq!(deal.currency, "USD");
        assert_eq!(deal.stage, "Unknown");
        assert_eq!(deal.exchange_rate, "1");
        assert_eq!(deal.owner, UserRef::unknown("Unknown Owner"));
        assert_eq!(deal.subform_1, SubformShape::default());
        // пустой data эквивалентен Default-записи целиком
        assert_eq!(deal, DealRecord::default());
    }

    #[test]
    fn populated_fields_pass_through_with_coercion() {
        let deal = parse_deal_record(&json!({
            "data": {
                "id": "D1",
                "Deal_Name": "Acme Deal",
                "Amount": "1250.5",
                "Probability": 80,
                "Account_Name": {"name": "Acme", "id": "acc-1"},
                "Owner": "Jane Doe",
                "Locked": 1,
                "Vendor_Garbage": {"whatever": true},
                "Managed": "Yes",
                "Circuit_Id": null,
                "Subform_1": [{"id": "P1"}]
            }
        }))
        .unwrap();

        assert_eq!(deal.id, "D1");
        assert_eq!(deal.deal_name, "Acme Deal");
        assert_eq!(deal.amount, 1250.5);
        assert_eq!(deal.probability, 80.0);
        assert_eq!(deal.account_name, UserRef::new("Acme", "acc-1"));
        // голая строка — это имя владельца
        assert_eq!(deal.owner, UserRef::new("Jane Doe", "unknown"));
        assert!(deal.locked);
        assert_eq!(deal.managed.as_deref(), Some("Yes"));
        assert_eq!(deal.circuit_id, None);
        assert_eq!(deal.subform_1.rows().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn map_shaped_subform_survives_normalization() {
        let deal = parse_deal_record(&json!({
            "data": {"id": "D2", "Subform_1": {"row_0": {"id": "P1"}}}
        }))
        .unwrap();
        assert!(matches!(deal.subform_1, SubformShape::Map(_)));
        assert!(deal.subform_1.rows().is_none());
    }
}
