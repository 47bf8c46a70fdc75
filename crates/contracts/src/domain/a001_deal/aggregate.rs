use serde::{Deserialize, Serialize};

use crate::domain::common::{SubformShape, UserRef};

/// Каноническая запись сделки (агрегат).
///
/// Строится нормализатором один раз на каждое PageLoad-событие и после
/// этого не мутируется — следующая загрузка создаёт новую запись.
/// Инварианты: `id` и `deal_name` всегда непустые (sentinel-значения
/// вместо отсутствия), числа всегда конечные, nullable-поля — явный
/// `Option`, никаких "undefined".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealRecord {
    // Обязательная идентификация
    pub id: String,
    #[serde(rename = "Deal_Name")]
    pub deal_name: String,

    // Пользовательские ссылки
    #[serde(rename = "Account_Name")]
    pub account_name: UserRef,
    #[serde(rename = "Owner")]
    pub owner: UserRef,
    #[serde(rename = "Created_By")]
    pub created_by: UserRef,
    #[serde(rename = "Modified_By")]
    pub modified_by: UserRef,

    // Финансы
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Exchange_Rate")]
    pub exchange_rate: String,

    // Стадия сделки
    #[serde(rename = "Stage")]
    pub stage: String,
    #[serde(rename = "Probability")]
    pub probability: f64,
    #[serde(rename = "Closing_Date")]
    pub closing_date: String,

    /// Сабформа продуктов; строки извлекаются экстрактором a002
    #[serde(rename = "Subform_1")]
    pub subform_1: SubformShape,

    // Контрактные идентификаторы
    #[serde(rename = "Contract_ID_ADIVB_Number")]
    pub contract_id_adivb_number: Option<String>,
    #[serde(rename = "PM_Request_Id")]
    pub pm_request_id: Option<String>,
    #[serde(rename = "Contract_Product")]
    pub contract_product: bool,
    #[serde(rename = "Group_Product")]
    pub group_product: bool,

    // Даты жизненного цикла
    #[serde(rename = "Contract_Signed_Date")]
    pub contract_signed_date: Option<String>,
    #[serde(rename = "Counter_Signed_Date")]
    pub counter_signed_date: Option<String>,
    #[serde(rename = "Order_Handoff_Date")]
    pub order_handoff_date: Option<String>,
    #[serde(rename = "Project_Completed_Date")]
    pub project_completed_date: Option<String>,
    #[serde(rename = "Project_Completed")]
    pub project_completed: Option<String>,

    // Сервисный адрес
    #[serde(rename = "Service_Street")]
    pub service_street: Option<String>,
    #[serde(rename = "Service_City")]
    pub service_city: Option<String>,
    #[serde(rename = "Service_State")]
    pub service_state: Option<String>,
    #[serde(rename = "Service_Zip_Code")]
    pub service_zip_code: Option<String>,
    #[serde(rename = "Timezone")]
    pub timezone: Option<String>,

    // Юридический адрес
    #[serde(rename = "Street")]
    pub street: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Zip_Code1")]
    pub zip_code1: Option<String>,

    // Технические идентификаторы
    #[serde(rename = "Circuit_Id")]
    pub circuit_id: Option<String>,
    #[serde(rename = "MCN")]
    pub mcn: Option<String>,
    #[serde(rename = "MAC_P")]
    pub mac_p: Option<String>,
    #[serde(rename = "Sub_Account_ID")]
    pub sub_account_id: Option<String>,
    #[serde(rename = "Federal_Tax_ID")]
    pub federal_tax_id: Option<String>,

    // Провайдеры (свободный текст)
    #[serde(rename = "Internet_Provider_and_Speed_Free_Field")]
    pub internet_provider_and_speed: Option<String>,
    #[serde(rename = "Wireless_Carrier_and_Number_of_Lines_Free_Field")]
    pub wireless_carrier_and_lines: Option<String>,
    #[serde(rename = "Phone_Provider_and_Number_of_Lines_Free_Field")]
    pub phone_provider_and_lines: Option<String>,
    #[serde(rename = "Phone_System_Make_Model")]
    pub phone_system_make_model: Option<String>,

    // Классификация сделки
    #[serde(rename = "Deal_Department")]
    pub deal_department: Option<String>,
    #[serde(rename = "Deal_Type")]
    pub deal_type: Option<String>,
    #[serde(rename = "Deal_Focus")]
    pub deal_focus: Option<String>,
    #[serde(rename = "Lead_Type")]
    pub lead_type: Option<String>,
    #[serde(rename = "Lead_Source")]
    pub lead_source: Option<String>,

    #[serde(rename = "Product_Type")]
    pub product_type: Option<String>,
    #[serde(rename = "Data_Interface_Type")]
    pub data_interface_type: Option<String>,
    // Орфография поля сохранена как в CRM
    #[serde(rename = "Curent_Services")]
    pub curent_services: Option<String>,
    #[serde(rename = "Total_Wireline")]
    pub total_wireline: Option<String>,

    // Статусные флаги
    #[serde(rename = "Locked")]
    pub locked: bool,
    #[serde(rename = "Is_Disconnected")]
    pub is_disconnected: bool,
    #[serde(rename = "Managed")]
    pub managed: Option<String>,
    #[serde(rename = "Voice_Handoff")]
    pub voice_handoff: Option<String>,

    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Layout_Name")]
    pub layout_name: Option<String>,
    #[serde(rename = "Layout")]
    pub layout: Option<String>,

    // Партнёры
    #[serde(rename = "Partner_Vendor_1")]
    pub partner_vendor_1: UserRef,
    #[serde(rename = "Partner_Vendor_2")]
    pub partner_vendor_2: UserRef,

    // Workflow
    #[serde(rename = "Validated_By")]
    pub validated_by: Option<String>,
    #[serde(rename = "Processed_By")]
    pub processed_by: Option<String>,
    #[serde(rename = "Order_Validation_Link")]
    pub order_validation_link: Option<String>,

    // Интеграция WorkDrive
    #[serde(rename = "zohoworkdriveforcrm__Workdrive_Folder_URL")]
    pub workdrive_folder_url: Option<String>,

    // Системные флаги
    #[serde(rename = "Testing_trigger")]
    pub testing_trigger: bool,
    #[serde(rename = "Developer_Space")]
    pub developer_space: bool,

    // Продажи и маркетинг
    #[serde(rename = "Sales_Traction")]
    pub sales_traction: Option<String>,
    #[serde(rename = "Forecast_Category__s")]
    pub forecast_category: Option<String>,

    #[serde(rename = "Account_Number")]
    pub account_number: Option<String>,
    #[serde(rename = "Campaign")]
    pub campaign: Option<String>,
    #[serde(rename = "Email_Marketing_Status")]
    pub email_marketing_status: Option<String>,

    // Телефония
    #[serde(rename = "With_Call_Paths")]
    pub with_call_paths: Option<String>,
    #[serde(rename = "Porting_Moving_TNs")]
    pub porting_moving_tns: bool,

    // Причины закрытия
    #[serde(rename = "Previous_Deal_Disconnect")]
    pub previous_deal_disconnect: Option<String>,
    #[serde(rename = "Reason_for_Closed_Lost1")]
    pub reason_for_closed_lost1: Option<String>,
}

impl Default for DealRecord {
    /// Значения по умолчанию совпадают с результатом нормализации
    /// пустого `data` — sentinel-значения вместо отсутствующих полей
    fn default() -> Self {
        Self {
            id: "unknown".to_string(),
            deal_name: "Unknown Deal".to_string(),
            account_name: UserRef::unknown("Unknown Account"),
            owner: UserRef::unknown("Unknown Owner"),
            created_by: UserRef::unknown("Unknown Creator"),
            modified_by: UserRef::unknown("Unknown Modifier"),
            amount: 0.0,
            currency: "USD".to_string(),
            exchange_rate: "1".to_string(),
            stage: "Unknown".to_string(),
            probability: 0.0,
            closing_date: String::new(),
            subform_1: SubformShape::default(),
            contract_id_adivb_number: None,
            pm_request_id: None,
            contract_product: false,
            group_product: false,
            contract_signed_date: None,
            counter_signed_date: None,
            order_handoff_date: None,
            project_completed_date: None,
            project_completed: None,
            service_street: None,
            service_city: None,
            service_state: None,
            service_zip_code: None,
            timezone: None,
            street: None,
            city: None,
            state: None,
            zip_code1: None,
            circuit_id: None,
            mcn: None,
            mac_p: None,
            sub_account_id: None,
            federal_tax_id: None,
            internet_provider_and_speed: None,
            wireless_carrier_and_lines: None,
            phone_provider_and_lines: None,
            phone_system_make_model: None,
            deal_department: None,
            deal_type: None,
            deal_focus: None,
            lead_type: None,
            lead_source: None,
            product_type: None,
            data_interface_type: None,
            curent_services: None,
            total_wireline: None,
            locked: false,
            is_disconnected: false,
            managed: None,
            voice_handoff: None,
            description: None,
            layout_name: None,
            layout: None,
            partner_vendor_1: UserRef::default(),
            partner_vendor_2: UserRef::default(),
            validated_by: None,
            processed_by: None,
            order_validation_link: None,
            workdrive_folder_url: None,
            testing_trigger: false,
            developer_space: false,
            sales_traction: None,
            forecast_category: None,
            account_number: None,
            campaign: None,
            email_marketing_status: None,
            with_call_paths: None,
            porting_moving_tns: false,
            previous_deal_disconnect: None,
            reason_for_closed_lost1: None,
        }
    }
}
