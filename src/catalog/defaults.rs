use super::NodeKind;

/// Flow kinds of the built-in logistics catalog.
pub fn logistics_flow_kinds() -> Vec<NodeKind> {
    vec![
        NodeKind::new("truckSource", "Truck Source", "Source")
            .with_description("Where trucks arrive and depart")
            .with_icon("icons/TruckSource.svg")
            .with_color("#4CAF50")
            .with_ports(false, true)
            .allowing(&["warehouse", "gate"]),
        NodeKind::new("parking", "Parking", "Area")
            .with_description("Temporary parking lot")
            .with_icon("icons/Parking.svg")
            .with_color("#2196F3")
            .with_ports(true, true)
            .allowing(&["carStop"]),
        NodeKind::new("truckBay", "Truck Bay", "Area")
            .with_description("Loading and unloading bay")
            .with_icon("icons/TruckBay.svg")
            .with_color("#FF9800")
            .with_ports(true, true)
            .allowing(&["carStop"]),
        NodeKind::new("tmpStorage", "Temporary Storage", "Storage")
            .with_description("Short-term storage area")
            .with_icon("icons/TmpStorage.svg")
            .with_color("#9C27B0")
            .with_ports(true, true)
            .allowing(&["pallet"]),
        NodeKind::new("destinations", "Destinations", "Destination")
            .with_description("Delivery destinations")
            .with_icon("icons/Destinations.svg")
            .with_color("#E91E63")
            .with_ports(true, false)
            .allowing(&["warehouse", "gate"]),
    ]
}

/// Physical kinds of the built-in logistics catalog.
pub fn logistics_physical_kinds() -> Vec<NodeKind> {
    vec![
        NodeKind::new("warehouse", "Warehouse", "Facility")
            .with_description("Warehouse holding goods")
            .with_icon("icons/Warehouse.svg")
            .with_color("#4CAF50"),
        NodeKind::new("gate", "Gate", "Facility")
            .with_description("Site entry and exit gate")
            .with_icon("icons/Gate.svg")
            .with_color("#607D8B"),
        NodeKind::new("carStop", "Car Stop", "Facility")
            .with_description("Vehicle stopping point")
            .with_icon("icons/CarStop.svg")
            .with_color("#2196F3"),
        NodeKind::new("pallet", "Pallet", "Facility")
            .with_description("Pallet placement area")
            .with_icon("icons/Pallet.svg")
            .with_color("#FF9800"),
        NodeKind::new("storageArea", "Storage Area", "Area")
            .with_description("Bulk storage area")
            .with_icon("icons/StorageArea.svg")
            .with_color("#9C27B0"),
    ]
}
