use crate::models::ConsultationForm;

/// One page of the intake form and the fields it is responsible for.
/// Navigation past a step requires every one of its fields to be filled.
#[derive(Debug, Clone, Copy)]
pub struct StepDescriptor {
    pub id: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [&'static str],
}

pub const STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: 1,
        title: "Data Pemohon",
        description: "Informasi identitas pemohon",
        fields: &[
            "tanggal",
            "waktu",
            "nama",
            "instansi",
            "jabatan",
            "alamat",
            "provinsiPemohon",
            "noTelp",
            "jumlahTamu",
        ],
    },
    StepDescriptor {
        id: 2,
        title: "Data Pengadaan",
        description: "Detail pengadaan barang/jasa",
        fields: &["jenisPengadaan", "metodePemilihan", "wilayahPengadaan"],
    },
    StepDescriptor {
        id: 3,
        title: "Permasalahan",
        description: "Jenis dan kronologi masalah",
        fields: &["jenisPermasalahan"],
    },
];

pub fn step(id: usize) -> Option<&'static StepDescriptor> {
    STEPS.iter().find(|s| s.id == id)
}

/// Human-readable label shown when a field blocks navigation.
pub fn field_label(field: &str) -> &str {
    match field {
        "tanggal" => "Tanggal",
        "waktu" => "Waktu",
        "nama" => "Nama Pemohon",
        "instansi" => "Instansi",
        "jabatan" => "Jabatan",
        "alamat" => "Alamat",
        "provinsiPemohon" => "Provinsi Pemohon",
        "noTelp" => "Nomor Telepon",
        "jumlahTamu" => "Jumlah Tamu",
        "jenisPengadaan" => "Jenis Pengadaan",
        "metodePemilihan" => "Metode Pemilihan",
        "wilayahPengadaan" => "Wilayah Pengadaan",
        "jenisPermasalahan" => "Jenis Permasalahan",
        other => other,
    }
}

/// The generic check the step gate is built on: evaluate one step's field
/// set against the current values and return the fields that fail.
pub fn missing_fields(step: &StepDescriptor, form: &ConsultationForm) -> Vec<&'static str> {
    step.fields
        .iter()
        .copied()
        .filter(|field| !form.field_is_filled(field))
        .collect()
}
