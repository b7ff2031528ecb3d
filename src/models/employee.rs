use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Attachment, FieldError, FieldKind, FieldSpec, FieldValue, Resource};

const GENDERS: &[&str] = &["Laki-laki", "Perempuan"];

/// Employee record, `/api/karyawan`. The heaviest entity: two contract
/// dates plus eight scanned-document attachments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "karyawanId", default)]
    pub karyawan_id: String,
    #[serde(default)]
    pub nama_karyawan: String,
    #[serde(default)]
    pub alamat: String,
    #[serde(default)]
    pub no_telfon: i64,
    #[serde(default)]
    pub gender: String,
    #[serde(default, with = "super::wire_date")]
    pub tanggal_join: Option<NaiveDate>,
    #[serde(default, with = "super::wire_date")]
    pub habis_kontrak: Option<NaiveDate>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub ktp: Attachment,
    #[serde(default)]
    pub kartu_keluarga: Attachment,
    #[serde(default)]
    pub pass_foto: Attachment,
    #[serde(default)]
    pub bpjs: Attachment,
    #[serde(default)]
    pub ijazah: Attachment,
    #[serde(default)]
    pub offering_letter: Attachment,
    #[serde(default)]
    pub kontrak_kerja: Attachment,
    #[serde(default)]
    pub sp: Attachment,
    /// Server-assigned; never sent in form bodies.
    #[serde(default)]
    pub create_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "nama_karyawan",
        label: "Nama Karyawan",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "alamat",
        label: "Alamat",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "no_telfon",
        label: "No Telfon",
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "gender",
        label: "Gender",
        kind: FieldKind::Select(GENDERS),
    },
    FieldSpec {
        name: "tanggal_join",
        label: "Tanggal Join",
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "habis_kontrak",
        label: "Habis Kontrak",
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "unit",
        label: "Unit",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "ktp",
        label: "KTP",
        kind: FieldKind::Attachment,
    },
    FieldSpec {
        name: "kartu_keluarga",
        label: "Kartu Keluarga",
        kind: FieldKind::Attachment,
    },
    FieldSpec {
        name: "pass_foto",
        label: "Pass Foto",
        kind: FieldKind::Attachment,
    },
    FieldSpec {
        name: "bpjs",
        label: "BPJS",
        kind: FieldKind::Attachment,
    },
    FieldSpec {
        name: "ijazah",
        label: "Ijazah",
        kind: FieldKind::Attachment,
    },
    FieldSpec {
        name: "offering_letter",
        label: "Offering Letter",
        kind: FieldKind::Attachment,
    },
    FieldSpec {
        name: "kontrak_kerja",
        label: "Kontrak Kerja",
        kind: FieldKind::Attachment,
    },
    FieldSpec {
        name: "sp",
        label: "SP",
        kind: FieldKind::Attachment,
    },
];

impl Resource for Employee {
    const ENDPOINT: &'static str = "karyawan";
    const ID_FIELD: &'static str = "karyawanId";
    const LABEL: &'static str = "employee";

    fn id(&self) -> &str {
        &self.karyawan_id
    }

    fn set_id(&mut self, id: String) {
        self.karyawan_id = id;
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "nama_karyawan" => Some(FieldValue::Text(self.nama_karyawan.clone())),
            "alamat" => Some(FieldValue::Text(self.alamat.clone())),
            "no_telfon" => Some(FieldValue::Number(self.no_telfon)),
            "gender" => Some(FieldValue::Text(self.gender.clone())),
            "tanggal_join" => self.tanggal_join.map(FieldValue::Date),
            "habis_kontrak" => self.habis_kontrak.map(FieldValue::Date),
            "unit" => Some(FieldValue::Text(self.unit.clone())),
            "ktp" => Some(FieldValue::Attachment(self.ktp.clone())),
            "kartu_keluarga" => Some(FieldValue::Attachment(self.kartu_keluarga.clone())),
            "pass_foto" => Some(FieldValue::Attachment(self.pass_foto.clone())),
            "bpjs" => Some(FieldValue::Attachment(self.bpjs.clone())),
            "ijazah" => Some(FieldValue::Attachment(self.ijazah.clone())),
            "offering_letter" => Some(FieldValue::Attachment(self.offering_letter.clone())),
            "kontrak_kerja" => Some(FieldValue::Attachment(self.kontrak_kerja.clone())),
            "sp" => Some(FieldValue::Attachment(self.sp.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match (name, value) {
            ("nama_karyawan", FieldValue::Text(v)) => self.nama_karyawan = v,
            ("alamat", FieldValue::Text(v)) => self.alamat = v,
            ("no_telfon", FieldValue::Number(n)) => self.no_telfon = n,
            ("gender", FieldValue::Text(v)) => self.gender = v,
            ("tanggal_join", FieldValue::Date(d)) => self.tanggal_join = Some(d),
            ("habis_kontrak", FieldValue::Date(d)) => self.habis_kontrak = Some(d),
            ("unit", FieldValue::Text(v)) => self.unit = v,
            ("ktp", FieldValue::Attachment(a)) => self.ktp = a,
            ("kartu_keluarga", FieldValue::Attachment(a)) => self.kartu_keluarga = a,
            ("pass_foto", FieldValue::Attachment(a)) => self.pass_foto = a,
            ("bpjs", FieldValue::Attachment(a)) => self.bpjs = a,
            ("ijazah", FieldValue::Attachment(a)) => self.ijazah = a,
            ("offering_letter", FieldValue::Attachment(a)) => self.offering_letter = a,
            ("kontrak_kerja", FieldValue::Attachment(a)) => self.kontrak_kerja = a,
            ("sp", FieldValue::Attachment(a)) => self.sp = a,
            (other, _) if FIELDS.iter().any(|f| f.name == other) => {
                return Err(FieldError::KindMismatch {
                    field: other.to_string(),
                })
            }
            (other, _) => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}
