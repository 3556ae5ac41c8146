#[cfg(test)]
mod tests {
    use crate::parsing::csv_parser::parse_incident_csv;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    /// Test parsing a CSV with the raw export headers
    #[test]
    fn test_parse_incident_csv_basic() {
        let csv_content = "Date Occ,Date Rptd,Time Occ,Lat,Lon,Area Name,Crm Cd Desc,Weapon Desc,Vict Age,Vict Sex,Vict Descent,Status Desc\n\
            01/05/2021 12:00:00 AM,01/06/2021 12:00:00 AM,930,34.05,-118.25,Central,ROBBERY,HAND GUN,34,F,H,Invest Cont\n\
            01/20/2021 12:00:00 AM,01/21/2021 12:00:00 AM,2215,34.11,-118.44,Hollywood,BURGLARY,,27,M,W,Adult Arrest\n";

        let temp_file = create_temp_csv(csv_content);
        let result = parse_incident_csv(temp_file.path());

        assert!(result.is_ok(), "Should parse basic CSV: {:?}", result.err());
        let df = result.unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 12);
    }

    /// Test that raw headers arrive untouched (canonicalization happens later)
    #[test]
    fn test_parse_incident_csv_keeps_raw_headers() {
        let csv_content = "Date Occ,Time Occ,Lat,Lon\n01/05/2021 12:00:00 AM,930,34.05,-118.25\n";

        let temp_file = create_temp_csv(csv_content);
        let df = parse_incident_csv(temp_file.path()).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert!(names.contains(&"Date Occ".to_string()));
        assert!(names.contains(&"Time Occ".to_string()));
    }

    /// Test that empty coordinate cells read as nulls
    #[test]
    fn test_parse_incident_csv_empty_cells_are_null() {
        let csv_content = "Lat,Lon\n34.05,-118.25\n,-118.30\n34.11,\n";

        let temp_file = create_temp_csv(csv_content);
        let df = parse_incident_csv(temp_file.path()).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(df.column("Lat").unwrap().null_count(), 1);
        assert_eq!(df.column("Lon").unwrap().null_count(), 1);
    }

    /// Test parsing a nonexistent file
    #[test]
    fn test_parse_incident_csv_missing_file() {
        let result = parse_incident_csv(std::path::Path::new("/nonexistent/incidents.csv"));
        assert!(result.is_err(), "Should fail for a missing file");
    }
}
