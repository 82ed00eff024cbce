//! Scalar KPIs over the rollups.

use trailer_model::{AttachmentKpis, AttachmentRow, EquipmentKpis, VridRow};

/// Total loads, total not attached, and the risk percentage.
pub fn attachment_kpis(rows: &[AttachmentRow]) -> AttachmentKpis {
    let (total_loads, total_not_attached) = rows.iter().fold((0, 0), |(loads, missing), row| {
        (loads + row.total_loads, missing + row.not_attached)
    });
    AttachmentKpis::from_totals(total_loads, total_not_attached)
}

pub fn equipment_kpis(rows: &[VridRow]) -> EquipmentKpis {
    rows.iter().fold(EquipmentKpis::default(), |acc, row| EquipmentKpis {
        total_vrids: acc.total_vrids + row.total_vrids,
        total_azng: acc.total_azng + row.azng,
        total_aznu: acc.total_aznu + row.aznu,
    })
}
