pub mod a101_company;
pub mod a102_department;
pub mod a103_employee;
pub mod a104_role;
pub mod a105_position;
pub mod a106_contractor;
pub mod a107_segment;
pub mod a108_brand;
