use serde::Serialize;

use crate::models::ConsultationRecord;
use crate::render::RenderError;

// ---------------------------------------------------------------------------
// XHTML print layout
// ---------------------------------------------------------------------------
// Serialized through quick_xml, the same way the submission documents are
// generated elsewhere. Strictly element-based so the serializer stays happy.

#[derive(Serialize)]
#[serde(rename = "html")]
struct Html {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    head: Head,
    body: Body,
}

#[derive(Serialize)]
struct Head {
    title: String,
    style: Style,
}

#[derive(Serialize)]
struct Style {
    #[serde(rename = "$text")]
    css: &'static str,
}

#[derive(Serialize)]
struct Body {
    h1: &'static str,
    p: Vec<String>,
    #[serde(rename = "div")]
    sections: Vec<Section>,
    img: Option<Img>,
}

#[derive(Serialize)]
struct Section {
    h2: &'static str,
    table: Table,
}

#[derive(Serialize)]
struct Table {
    #[serde(rename = "tr")]
    rows: Vec<Row>,
}

#[derive(Serialize)]
struct Row {
    th: String,
    td: String,
}

#[derive(Serialize)]
struct Img {
    #[serde(rename = "@src")]
    src: String,
    #[serde(rename = "@alt")]
    alt: &'static str,
    #[serde(rename = "@width")]
    width: &'static str,
}

const PRINT_CSS: &str = "body{font-family:serif;margin:2em}\
table{border-collapse:collapse;width:100%}\
th{text-align:left;width:14em;vertical-align:top}\
th,td{border:1px solid #999;padding:4px 8px}";

fn row(label: &str, value: &str) -> Row {
    Row {
        th: label.to_string(),
        td: if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        },
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn sections(record: &ConsultationRecord) -> Vec<Section> {
    let form = &record.form;
    vec![
        Section {
            h2: "Data Pemohon",
            table: Table {
                rows: vec![
                    row("Tanggal", &form.tanggal),
                    row("Waktu", &form.waktu),
                    row("Nama Pemohon", &form.nama),
                    row("Instansi", &form.instansi),
                    row("Jabatan", &form.jabatan),
                    row("Alamat", &form.alamat),
                    row("Provinsi Pemohon", &form.provinsi_pemohon),
                    row("Nomor Telepon", &form.no_telp),
                    row("Jumlah Tamu", &form.jumlah_tamu.to_string()),
                ],
            },
        },
        Section {
            h2: "Data Pengadaan",
            table: Table {
                rows: vec![
                    row("ID Paket Pengadaan", opt(&form.id_paket_pengadaan)),
                    row("Nama Paket Pengadaan", opt(&form.nama_paket_pengadaan)),
                    row("Nilai Kontrak", opt(&form.nilai_kontrak)),
                    row(
                        "Kontrak Ditandatangani",
                        if form.ttd_kontrak { "Ya" } else { "Tidak" },
                    ),
                    row("Jenis Kontrak", opt(&form.jenis_kontrak)),
                    row("Wilayah Pengadaan", &form.wilayah_pengadaan),
                    row("Sumber Anggaran", opt(&form.sumber_anggaran)),
                    row("Jenis Pengadaan", &form.jenis_pengadaan),
                    row("Metode Pemilihan", &form.metode_pemilihan),
                ],
            },
        },
        Section {
            h2: "Permasalahan",
            table: Table {
                rows: vec![
                    row("Jenis Permasalahan", &form.jenis_permasalahan),
                    row("Kronologi", opt(&form.kronologi)),
                ],
            },
        },
    ]
}

pub(crate) fn to_xhtml(record: &ConsultationRecord) -> Result<String, RenderError> {
    let doc = Html {
        xmlns: "http://www.w3.org/1999/xhtml",
        head: Head {
            title: format!("Formulir Konsultasi - {}", record.form.nama),
            style: Style { css: PRINT_CSS },
        },
        body: Body {
            h1: "Formulir Konsultasi Pengadaan Barang/Jasa",
            p: vec![
                format!("Nomor: {}", record.id),
                format!("Status: {}", record.status),
                format!("Disimpan: {}", record.created_at.format("%Y-%m-%d %H:%M UTC")),
            ],
            sections: sections(record),
            img: record.signature_data.as_ref().map(|url| Img {
                src: url.clone(),
                alt: "Tanda tangan pemohon",
                width: "300",
            }),
        },
    };

    let xml = quick_xml::se::to_string(&doc)?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", xml))
}

pub(crate) fn to_plain_text(record: &ConsultationRecord) -> String {
    let form = &record.form;
    let line = |label: &str, value: &str| -> String {
        let v = if value.trim().is_empty() { "-" } else { value };
        format!("{:<24}: {}\n", label, v)
    };

    let mut out = String::new();
    out.push_str("FORMULIR KONSULTASI PENGADAAN BARANG/JASA\n");
    out.push_str(&format!("Nomor  : {}\n", record.id));
    out.push_str(&format!("Status : {}\n\n", record.status));

    out.push_str("== Data Pemohon ==\n");
    out.push_str(&line("Tanggal", &form.tanggal));
    out.push_str(&line("Waktu", &form.waktu));
    out.push_str(&line("Nama Pemohon", &form.nama));
    out.push_str(&line("Instansi", &form.instansi));
    out.push_str(&line("Jabatan", &form.jabatan));
    out.push_str(&line("Alamat", &form.alamat));
    out.push_str(&line("Provinsi Pemohon", &form.provinsi_pemohon));
    out.push_str(&line("Nomor Telepon", &form.no_telp));
    out.push_str(&line("Jumlah Tamu", &form.jumlah_tamu.to_string()));

    out.push_str("\n== Data Pengadaan ==\n");
    out.push_str(&line("ID Paket Pengadaan", opt(&form.id_paket_pengadaan)));
    out.push_str(&line("Nama Paket Pengadaan", opt(&form.nama_paket_pengadaan)));
    out.push_str(&line("Nilai Kontrak", opt(&form.nilai_kontrak)));
    out.push_str(&line(
        "Kontrak Ditandatangani",
        if form.ttd_kontrak { "Ya" } else { "Tidak" },
    ));
    out.push_str(&line("Jenis Kontrak", opt(&form.jenis_kontrak)));
    out.push_str(&line("Wilayah Pengadaan", &form.wilayah_pengadaan));
    out.push_str(&line("Sumber Anggaran", opt(&form.sumber_anggaran)));
    out.push_str(&line("Jenis Pengadaan", &form.jenis_pengadaan));
    out.push_str(&line("Metode Pemilihan", &form.metode_pemilihan));

    out.push_str("\n== Permasalahan ==\n");
    out.push_str(&line("Jenis Permasalahan", &form.jenis_permasalahan));
    out.push_str(&line("Kronologi", opt(&form.kronologi)));

    out.push_str(&format!(
        "\nTanda tangan: {}\n",
        if record.signature_data.is_some() {
            "terlampir"
        } else {
            "tidak ada"
        }
    ));
    out
}
