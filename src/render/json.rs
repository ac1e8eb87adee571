use serde::Serialize;

use crate::{
    core::table::Table,
    error::ReportError,
    render::{Render, Section},
};

pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(
        &self,
        daily_rate: &Table,
        daily_volume: &Table,
        weekly_volume: &Table,
    ) -> Result<Vec<u8>, ReportError> {
        #[derive(Serialize)]
        struct Document<'a> {
            sections: [Section<'a>; 3],
        }

        let document =
            Document { sections: Section::all(daily_rate, daily_volume, weekly_volume) };
        serde_json::to_vec_pretty(&document).map_err(ReportError::render)
    }
}
