/// Payloads pushed by [`SampleSeederPort::seed_samples`](cv_core::ports::SampleSeederPort),
/// in emission order.
pub const SAMPLE_ENTRIES: [&str; 7] = [
    "Hello, this is a sample clipboard entry!",
    "const greet = (name: string) => {\n  console.log(`Hello, ${name}!`);\n};",
    "https://github.com/tauri-apps/tauri",
    r#"{
  "user": {
    "id": 12345,
    "username": "john_doe",
    "email": "john@example.com",
    "profile": {
      "firstName": "John",
      "lastName": "Doe",
      "age": 28,
      "isActive": true,
      "preferences": {
        "theme": "dark",
        "notifications": {
          "email": true,
          "push": false,
          "sms": true
        }
      }
    },
    "roles": ["user", "moderator"],
    "lastLogin": "2024-01-15T10:30:00Z",
    "metadata": null
  }
}"#,
    r#"{
  "apiResponse": {
    "status": "success",
    "data": [
      {
        "id": 1,
        "title": "Sample Product",
        "price": 29.99,
        "currency": "USD",
        "inStock": true,
        "tags": ["electronics", "gadget", "popular"],
        "dimensions": {
          "width": 10.5,
          "height": 5.2,
          "depth": 2.1,
          "unit": "cm"
        }
      },
      {
        "id": 2,
        "title": "Another Product",
        "price": 15.50,
        "currency": "USD",
        "inStock": false,
        "tags": ["accessory", "limited"],
        "dimensions": {
          "width": 8.0,
          "height": 3.5,
          "depth": 1.5,
          "unit": "cm"
        }
      }
    ],
    "pagination": {
      "page": 1,
      "totalPages": 5,
      "totalItems": 50,
      "hasNext": true
    }
  }
}"#,
    r#"{
  "config": {
    "appName": "Clipboard Manager",
    "version": "2.0.0",
    "environment": "production",
    "features": {
      "jsonViewer": true,
      "searchEnabled": true,
      "autoValidation": true,
      "exportFormats": ["json", "csv", "xml"]
    },
    "database": {
      "host": "localhost",
      "port": 5432,
      "name": "clipman_db",
      "ssl": false
    },
    "logging": {
      "level": "info",
      "outputs": ["console", "file"],
      "maxFileSize": "10MB"
    }
  }
}"#,
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
];
