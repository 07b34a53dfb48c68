//! Controlled vocabularies carried over from the intake form.
//!
//! `status` and `jenisPermasalahan` are enforced at the application level,
//! not by the database, so these lists are the single source of truth.

/// The 38 provinces selectable for both the applicant and the procurement
/// region.
pub const PROVINSI: &[&str] = &[
    "Aceh",
    "Sumatera Utara",
    "Sumatera Barat",
    "Riau",
    "Jambi",
    "Sumatera Selatan",
    "Bengkulu",
    "Lampung",
    "Kepulauan Bangka Belitung",
    "Kepulauan Riau",
    "DKI Jakarta",
    "Jawa Barat",
    "Jawa Tengah",
    "DI Yogyakarta",
    "Jawa Timur",
    "Banten",
    "Bali",
    "Nusa Tenggara Barat",
    "Nusa Tenggara Timur",
    "Kalimantan Barat",
    "Kalimantan Tengah",
    "Kalimantan Selatan",
    "Kalimantan Timur",
    "Kalimantan Utara",
    "Sulawesi Utara",
    "Sulawesi Tengah",
    "Sulawesi Selatan",
    "Sulawesi Tenggara",
    "Gorontalo",
    "Sulawesi Barat",
    "Maluku",
    "Maluku Utara",
    "Papua Barat",
    "Papua",
    "Papua Selatan",
    "Papua Tengah",
    "Papua Pegunungan",
    "Papua Barat Daya",
];

pub const JENIS_PENGADAAN: &[&str] = &[
    "Terintegrasi",
    "Barang",
    "Jasa Lainnya",
    "Jasa Konstruksi",
    "Pekerjaan Konstruksi",
];

pub const METODE_PEMILIHAN: &[&str] = &[
    "E-purchasing",
    "Pengadaan Langsung",
    "Penunjukan Langsung",
    "Tender Cepat",
    "Tender",
];

pub const JENIS_KONTRAK: &[&str] = &[
    "Kontrak Lump Sum",
    "Kontrak Harga Satuan",
    "Gabungan Lump Sum dan Harga Satuan",
    "Terima Jadi (Turnkey)",
    "Kontrak Payung",
];

pub const SUMBER_ANGGARAN: &[&str] = &[
    "APBN",
    "APBD",
    "SBSN",
    "Hibah Dalam Negeri",
    "Hibah Luar Negeri",
];

pub fn contains(list: &[&str], value: &str) -> bool {
    list.iter().any(|v| *v == value)
}
