use crate::error::ExportError;
use crate::view::InventoryView;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 11] = [
    "Floor",
    "Unit No",
    "Unit Label",
    "Status",
    "Unit Type",
    "View",
    "Total Area",
    "Rooms",
    "Parking",
    "Sales Value",
    "Floor No",
];

pub fn export_csv<P: AsRef<Path>>(view: &InventoryView, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(view, file)
}

/// Writes one row per unit in grid order: floors ascending, units by number.
pub fn write_csv<W: Write>(view: &InventoryView, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(HEADER)?;

    for floor in &view.grid.floors {
        for unit in &floor.units {
            let area = unit.total_area.map(|a| a.to_string()).unwrap_or_default();
            let price = unit.sales_value.map(|v| v.to_string()).unwrap_or_default();
            writer.write_record([
                floor.key.as_str(),
                unit.unit_no.as_str(),
                unit.unit_label.as_str(),
                unit.status().as_str(),
                unit.unit_type.as_deref().unwrap_or_default(),
                unit.view.as_deref().unwrap_or_default(),
                area.as_str(),
                unit.rooms.as_deref().unwrap_or_default(),
                unit.parking.as_deref().unwrap_or_default(),
                price.as_str(),
                unit.floor_no.as_deref().unwrap_or_default(),
            ])?;
        }
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
