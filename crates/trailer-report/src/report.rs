//! The complete result of one dashboard request.

use serde::{Deserialize, Serialize};
use trailer_model::{
    AttachmentKpis, AttachmentRow, EnrichedRecord, EquipmentKpis, ReportFilter, SiteVridRow,
    VridRow,
};
use trailer_transform::{attachment_kpis, attachment_rollup, equipment_kpis, site_chart, vrid_rollup};

/// Both rollups, their KPIs, and the site chart for one filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub filter: ReportFilter,
    pub attachment_kpis: AttachmentKpis,
    pub attachment: Vec<AttachmentRow>,
    pub equipment_kpis: EquipmentKpis,
    pub vrid: Vec<VridRow>,
    pub site_chart: Vec<SiteVridRow>,
}

impl DashboardReport {
    /// Aggregate an already filtered view.
    pub fn from_view(filter: ReportFilter, view: &[&EnrichedRecord]) -> Self {
        let attachment = attachment_rollup(view);
        let vrid = vrid_rollup(view);
        Self {
            filter,
            attachment_kpis: attachment_kpis(&attachment),
            equipment_kpis: equipment_kpis(&vrid),
            site_chart: site_chart(&vrid),
            attachment,
            vrid,
        }
    }

    /// True when no load passed the filter.
    pub fn is_empty(&self) -> bool {
        self.attachment.is_empty()
    }
}
