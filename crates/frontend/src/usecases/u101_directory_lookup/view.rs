use crate::domain::a101_company::ui::CompanySelect;
use crate::domain::a102_department::ui::DepartmentSelect;
use crate::domain::a103_employee::ui::EmployeeSelect;
use crate::domain::a104_role::ui::RoleSelect;
use crate::domain::a105_position::ui::PositionSelect;
use crate::domain::a106_contractor::ui::ContractorSelect;
use crate::domain::a107_segment::ui::SegmentSelect;
use crate::domain::a108_brand::ui::BrandSelect;
use crate::shared::async_select::SelectOption;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

fn describe(option: Option<SelectOption>) -> String {
    option
        .map(|o| format!("{} [{}]", o.label, o.value))
        .unwrap_or_else(|| "—".to_string())
}

/// Экран подбора значений из справочников
///
/// Зависимые поля получают параметр области поиска от родительского выбора:
/// компания → подразделение → сотрудник, контрагент → бренд.
#[component]
pub fn DirectoryLookup() -> impl IntoView {
    let (company, set_company) = signal(Option::<SelectOption>::None);
    let (department, set_department) = signal(Option::<SelectOption>::None);
    let (employee, set_employee) = signal(Option::<SelectOption>::None);
    let (role, set_role) = signal(Option::<SelectOption>::None);
    let (position, set_position) = signal(Option::<SelectOption>::None);
    let (contractor, set_contractor) = signal(Option::<SelectOption>::None);
    let (segment, set_segment) = signal(Option::<SelectOption>::None);
    let (brand, set_brand) = signal(Option::<SelectOption>::None);

    let company_id = Signal::derive(move || company.get().map(|c| c.value));
    let department_id = Signal::derive(move || department.get().map(|d| d.value));
    let contractor_id = Signal::derive(move || contractor.get().map(|c| c.value));
    let no_company = Signal::derive(move || Some(company.get().is_none()));
    let no_contractor = Signal::derive(move || Some(contractor.get().is_none()));

    let on_company = move |opt: Option<SelectOption>| {
        log!("[DirectoryLookup] company: {:?}", opt.as_ref().map(|o| &o.value));
        set_company.set(opt);
        // дочерние значения относятся к прежней компании
        set_department.set(None);
        set_employee.set(None);
    };

    let on_department = move |opt: Option<SelectOption>| {
        set_department.set(opt);
        set_employee.set(None);
    };

    let on_contractor = move |opt: Option<SelectOption>| {
        set_contractor.set(opt);
        set_brand.set(None);
    };

    view! {
        <div class="page directory-lookup">
            <h2>"Справочники"</h2>
            <Flex vertical=true gap=FlexGap::Large>
                <Flex gap=FlexGap::Large>
                    <CompanySelect on_select=on_company />
                    <DepartmentSelect
                        on_select=on_department
                        company_id=company_id
                        disabled=no_company
                    />
                    <EmployeeSelect
                        on_select=move |opt| set_employee.set(opt)
                        company_id=company_id
                        department_id=department_id
                        disabled=no_company
                    />
                </Flex>
                <Flex gap=FlexGap::Large>
                    <RoleSelect on_select=move |opt| set_role.set(opt) />
                    <PositionSelect on_select=move |opt| set_position.set(opt) />
                </Flex>
                <Flex gap=FlexGap::Large>
                    <ContractorSelect on_select=on_contractor />
                    <SegmentSelect on_select=move |opt| set_segment.set(opt) />
                    <BrandSelect
                        on_select=move |opt| set_brand.set(opt)
                        contractor_id=contractor_id
                        disabled=no_contractor
                    />
                </Flex>

                <table class="directory-lookup__summary">
                    <tbody>
                        <tr><td>"Компания"</td><td>{move || describe(company.get())}</td></tr>
                        <tr><td>"Подразделение"</td><td>{move || describe(department.get())}</td></tr>
                        <tr><td>"Сотрудник"</td><td>{move || describe(employee.get())}</td></tr>
                        <tr><td>"Роль"</td><td>{move || describe(role.get())}</td></tr>
                        <tr><td>"Должность"</td><td>{move || describe(position.get())}</td></tr>
                        <tr><td>"Контрагент"</td><td>{move || describe(contractor.get())}</td></tr>
                        <tr><td>"Сегмент"</td><td>{move || describe(segment.get())}</td></tr>
                        <tr><td>"Бренд"</td><td>{move || describe(brand.get())}</td></tr>
                    </tbody>
                </table>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "—");
        assert_eq!(describe(Some(SelectOption::new("c-1", "Acme"))), "Acme [c-1]");
    }
}
