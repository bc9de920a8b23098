//! Shipment cards and tables

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trellis_core::attr::{class, data};
use trellis_core::template::{H, for_each};
use trellis_themes::{TableData, Theme, Variant};

/// Delivery state of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
	/// Booked, not yet picked up
	Pending,
	/// On its way
	InTransit,
	/// Behind schedule
	Delayed,
	/// Handed over to the consignee
	Delivered,
	/// Will not be delivered
	Cancelled,
}

impl ShipmentStatus {
	/// Every status, from booking to completion.
	pub const ALL: [ShipmentStatus; 5] = [
		Self::Pending,
		Self::InTransit,
		Self::Delayed,
		Self::Delivered,
		Self::Cancelled,
	];

	/// Serialized name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Pending => "pending",
			Self::InTransit => "in_transit",
			Self::Delayed => "delayed",
			Self::Delivered => "delivered",
			Self::Cancelled => "cancelled",
		}
	}

	/// Human readable label.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Pending => "Pending",
			Self::InTransit => "In transit",
			Self::Delayed => "Delayed",
			Self::Delivered => "Delivered",
			Self::Cancelled => "Cancelled",
		}
	}

	/// Badge color.
	pub fn variant(&self) -> Variant {
		match self {
			Self::Pending => Variant::Secondary,
			Self::InTransit => Variant::Info,
			Self::Delayed => Variant::Warning,
			Self::Delivered => Variant::Success,
			Self::Cancelled => Variant::Danger,
		}
	}

	/// Whether the shipment can still change state.
	pub fn is_open(&self) -> bool {
		matches!(self, Self::Pending | Self::InTransit | Self::Delayed)
	}
}

/// A consignment moving between two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
	/// Tracking reference
	pub id: String,
	/// Departure location
	pub origin: String,
	/// Arrival location
	pub destination: String,
	/// Carrier name
	pub carrier: String,
	/// Current state
	pub status: ShipmentStatus,
	/// Estimated arrival
	pub eta: NaiveDate,
	/// Gross weight in kilograms
	pub weight_kg: f64,
	/// Route completed, from 0.0 to 1.0
	#[serde(default)]
	pub progress: f64,
}

impl Shipment {
	/// `origin → destination`.
	pub fn route(&self) -> String {
		format!("{} → {}", self.origin, self.destination)
	}

	/// Estimated arrival as `YYYY-MM-DD`.
	pub fn eta_label(&self) -> String {
		self.eta.format("%Y-%m-%d").to_string()
	}
}

/// A card summarizing one shipment, with a progress bar for open ones.
pub fn shipment_card(theme: &dyn Theme, shipment: &Shipment) -> H {
	let badge = theme.badge(shipment.status.label(), shipment.status.variant());
	let progress = shipment
		.status
		.is_open()
		.then(|| theme.progress(shipment.progress, 1.0, shipment.status.variant()));
	let details = theme.list(vec![
		H::text(format!("Carrier: {}", shipment.carrier)),
		H::text(format!("ETA: {}", shipment.eta_label())),
		H::text(format!("Weight: {:.1} kg", shipment.weight_kg)),
	]);
	let route = shipment.route();
	let id = shipment.id.clone();

	let body = H::new(move |b| {
		b.div((
			class("trellis-shipment"),
			data("shipment", &id),
			b.p((b.strong(route.clone()), " ", &badge)),
			&details,
			progress.as_ref(),
		))
	});
	theme.card(&shipment.id, body)
}

/// All shipments as cards in a three column grid.
pub fn shipment_cards(theme: &dyn Theme, shipments: &[Shipment]) -> H {
	let cards = shipments
		.iter()
		.map(|shipment| shipment_card(theme, shipment))
		.collect();
	theme.grid(3, cards)
}

/// All shipments as table rows, with the status as a badge.
pub fn shipments_table(theme: &dyn Theme, shipments: &[Shipment]) -> H {
	let table = shipments.iter().fold(
		TableData::new(["Reference", "Route", "Carrier", "ETA", "Status"])
			.caption(format!("{} shipments", shipments.len())),
		|table, shipment| {
			table.row([
				H::text(shipment.id.clone()),
				H::text(shipment.route()),
				H::text(shipment.carrier.clone()),
				H::text(shipment.eta_label()),
				theme.badge(shipment.status.label(), shipment.status.variant()),
			])
		},
	);
	theme.table(&table)
}

/// A summary line per status, in first-seen order.
pub fn status_summary(shipments: &[Shipment]) -> H {
	let mut counts: Vec<(ShipmentStatus, usize)> = Vec::new();
	for shipment in shipments {
		match counts.iter_mut().find(|(status, _)| *status == shipment.status) {
			Some((_, count)) => *count += 1,
			None => counts.push((shipment.status, 1)),
		}
	}
	for_each(counts, |(status, count)| {
		H::new(move |b| b.span((class("trellis-summary"), format!("{}: {count} ", status.label()))))
	})
}

/// Shipments used by the demo pages.
pub fn sample_shipments() -> Vec<Shipment> {
	let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
	vec![
		Shipment {
			id: "SHP-1001".into(),
			origin: "Rotterdam".into(),
			destination: "Hamburg".into(),
			carrier: "Nordline".into(),
			status: ShipmentStatus::InTransit,
			eta: date(2024, 6, 14),
			weight_kg: 1250.0,
			progress: 0.6,
		},
		Shipment {
			id: "SHP-1002".into(),
			origin: "Lyon".into(),
			destination: "Milano".into(),
			carrier: "Alpi Cargo".into(),
			status: ShipmentStatus::Delayed,
			eta: date(2024, 6, 18),
			weight_kg: 430.5,
			progress: 0.25,
		},
		Shipment {
			id: "SHP-1003".into(),
			origin: "Gdańsk".into(),
			destination: "Praha".into(),
			carrier: "Baltic & Co".into(),
			status: ShipmentStatus::Delivered,
			eta: date(2024, 6, 2),
			weight_kg: 980.0,
			progress: 1.0,
		},
		Shipment {
			id: "SHP-1004".into(),
			origin: "Valencia".into(),
			destination: "Porto".into(),
			carrier: "Iberia Freight".into(),
			status: ShipmentStatus::Pending,
			eta: date(2024, 6, 25),
			weight_kg: 75.2,
			progress: 0.0,
		},
		Shipment {
			id: "SHP-1005".into(),
			origin: "Antwerp".into(),
			destination: "<Unknown>".into(),
			carrier: "Nordline".into(),
			status: ShipmentStatus::Cancelled,
			eta: date(2024, 6, 9),
			weight_kg: 310.0,
			progress: 0.0,
		},
	]
}
