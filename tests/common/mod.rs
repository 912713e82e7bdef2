//
// (C) Copyright IBM 2026
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at http://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.
#![allow(dead_code)]

use serde_json::{json, Value};

pub fn setup() {
    api_endpoints::initialize();
}

pub fn version(number: u64) -> Value {
    let based_on = if number > 1 {
        json!(number - 1)
    } else {
        Value::Null
    };
    json!({
        "createdBy": "alice",
        "createDate": "2019-06-13T20:18:52+0000",
        "updateDate": "2019-06-13T20:18:52+0000",
        "updatedBy": "alice",
        "apiEndPointVersionId": 530000 + number,
        "basePath": "/bookstore",
        "description": null,
        "basedOn": based_on,
        "stagingStatus": null,
        "productionStatus": null,
        "stagingDate": null,
        "productionDate": null,
        "isVersionLocked": false,
        "availableActions": ["CLONE_ENDPOINT", "EDIT_ENDPOINT_DEFINITION"],
        "versionNumber": number,
        "lockVersion": 0
    })
}

pub fn versions(endpoint_id: u64, numbers: &[u64]) -> Value {
    json!({
        "apiEndPointId": endpoint_id,
        "apiEndPointName": "bookstore",
        "apiVersions": numbers.iter().map(|n| version(*n)).collect::<Vec<_>>()
    })
}

pub fn endpoint(endpoint_id: u64, number: u64) -> Value {
    json!({
        "apiEndPointId": endpoint_id,
        "apiEndPointName": "bookstore",
        "description": "Books",
        "basePath": "/bookstore",
        "apiEndPointScheme": "http/https",
        "apiEndPointHosts": ["books.example.com"],
        "apiEndPointLocked": false,
        "apiEndPointVersion": 530000 + number,
        "versionNumber": number,
        "lockVersion": 0,
        "apiCategoryIds": [],
        "protectedByApiKey": false,
        "stagingVersion": {"status": "ACTIVE", "versionNumber": 1},
        "productionVersion": {"status": null, "versionNumber": null},
        "apiResources": [{
            "apiResourceId": 11,
            "apiResourceName": "books",
            "resourcePath": "/books",
            "description": null,
            "apiResourceMethods": [{"apiResourceMethodId": 1, "apiResourceMethod": "GET"}]
        }]
    })
}
