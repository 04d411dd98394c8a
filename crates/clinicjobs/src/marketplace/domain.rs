use serde::{Deserialize, Serialize};

/// Marketplace side chosen at login; fixed for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Dentist,
    Clinic,
}

impl Role {
    pub const fn ordered() -> [Self; 2] {
        [Self::Dentist, Self::Clinic]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dentist => "Dentista",
            Self::Clinic => "Clínica",
        }
    }

    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::Dentist => "/dentist",
            Self::Clinic => "/clinic",
        }
    }
}

/// Whether the one-time activation fee has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Aguardando Ativação",
            Self::Paid => "Ativo",
        }
    }
}

/// São Paulo macro-regions used for job filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    ZonaNorte,
    ZonaSul,
    ZonaLeste,
    ZonaOeste,
    Centro,
}

impl Region {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ZonaNorte,
            Self::ZonaSul,
            Self::ZonaLeste,
            Self::ZonaOeste,
            Self::Centro,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ZonaNorte => "Zona Norte",
            Self::ZonaSul => "Zona Sul",
            Self::ZonaLeste => "Zona Leste",
            Self::ZonaOeste => "Zona Oeste",
            Self::Centro => "Centro",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|region| region.label() == label.trim())
    }
}

/// Contract regime advertised on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Clt,
    Pj,
    Autonomo,
}

impl ContractType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clt => "CLT",
            Self::Pj => "PJ",
            Self::Autonomo => "Autônomo",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [Self::Clt, Self::Pj, Self::Autonomo]
            .into_iter()
            .find(|contract| contract.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Practice-area tags offered to clinics when describing what they search for.
pub const SPECIALTIES: [&str; 11] = [
    "Implantodontia",
    "Ortodontia",
    "Endodontia",
    "Periodontia",
    "Odontopediatria",
    "Prótese Dentária",
    "Dentística",
    "Harmonização Orofacial",
    "Cirurgia Bucomaxilofacial",
    "Odontogeriatria",
    "Clínico Geral",
];
